use thiserror::Error;

/// 설계 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 입력값이 양의 유한값이 아님
    #[error("잘못된 입력값: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },
    /// 계산 결과가 유한하지 않음(0으로 나누기 등)
    #[error("계산 오류: {description}")]
    Computation { description: String },
}

pub type CalcResult<T> = Result<T, CalcError>;

/// 양의 유한값인지 확인한다.
pub(crate) fn require_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

/// 파생값이 유한한지 확인한다.
pub(crate) fn check_finite(quantity: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Computation {
            description: format!("{quantity} 값이 유한하지 않습니다 ({value})"),
        })
    }
}
