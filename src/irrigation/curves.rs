use serde::Serialize;

use super::constants::*;
use super::design::DesignResult;
use super::error::{check_finite, CalcError, CalcResult};

/// 펌프/시스템 곡선 기본 샘플 수
pub const DEFAULT_CURVE_SAMPLES: usize = 101;

/// 펌프 곡선과 시스템 곡선의 점열. 세 배열은 같은 인덱스끼리 짝을 이룬다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpSystemCurve {
    /// 유량 [L/s]
    pub flow: Vec<f64>,
    /// 시스템 양정 [m]
    pub system_head: Vec<f64>,
    /// 펌프 양정 [m]
    pub pump_head: Vec<f64>,
    /// 설계 운전점 (유량 L/s, 양정 m)
    pub operating_point: (f64, f64),
    /// 체절 양정 [m]
    pub shutoff_head_m: f64,
    /// 시스템 곡선 계수 k (H = k·Q²)
    pub system_coefficient: f64,
    /// 펌프 곡선 계수 C (H = Hs − C·Q²)
    pub pump_coefficient: f64,
}

impl PumpSystemCurve {
    pub fn system_head_at(&self, flow_l_per_s: f64) -> f64 {
        self.system_coefficient * flow_l_per_s * flow_l_per_s
    }

    pub fn pump_head_at(&self, flow_l_per_s: f64) -> f64 {
        self.shutoff_head_m - self.pump_coefficient * flow_l_per_s * flow_l_per_s
    }
}

pub(crate) fn require_sample_count(sample_count: usize) -> CalcResult<()> {
    if sample_count < 2 {
        return Err(CalcError::InvalidInput {
            field: "sample_count",
            value: sample_count as f64,
        });
    }
    Ok(())
}

/// 설계 운전점을 지나는 시스템 곡선과 추정 펌프 곡선을 생성한다.
///
/// 유량은 0부터 설계 유량의 1.7배까지 균등 분할한다. 시스템 곡선은 원점과 운전점을 지나는
/// 포물선, 펌프 곡선은 체절 양정(설계 양정의 1.25배)에서 시작해 운전점을 지나는 포물선이다.
pub fn generate_curve_points(
    design_flow_l_per_s: f64,
    design_head_m: f64,
    sample_count: usize,
) -> CalcResult<PumpSystemCurve> {
    if !design_flow_l_per_s.is_finite() || design_flow_l_per_s < 0.0 {
        return Err(CalcError::InvalidInput {
            field: "design_flow_l_per_s",
            value: design_flow_l_per_s,
        });
    }
    if !design_head_m.is_finite() || design_head_m < 0.0 {
        return Err(CalcError::InvalidInput {
            field: "design_head_m",
            value: design_head_m,
        });
    }
    require_sample_count(sample_count)?;
    if design_flow_l_per_s == 0.0 {
        return Err(CalcError::Computation {
            description: "설계 유량이 0이라 곡선 계수를 구할 수 없습니다 (0으로 나누기)".into(),
        });
    }

    let q2 = check_finite("design_flow_squared", design_flow_l_per_s * design_flow_l_per_s)?;
    let k = check_finite("system_coefficient", design_head_m / q2)?;
    let shutoff = SHUTOFF_HEAD_FACTOR * design_head_m;
    let c = check_finite("pump_coefficient", (shutoff - design_head_m) / q2)?;
    // 계수가 0으로 언더플로하면 곡선이 운전점을 지나지 않는다
    if design_head_m > 0.0 && (k == 0.0 || c == 0.0) {
        return Err(CalcError::Computation {
            description: format!(
                "설계 유량 {design_flow_l_per_s} L/s에서 곡선 계수가 0으로 언더플로했습니다"
            ),
        });
    }

    let q_max = CURVE_FLOW_SPAN * design_flow_l_per_s;
    let last = (sample_count - 1) as f64;
    let flow: Vec<f64> = (0..sample_count)
        .map(|i| q_max * (i as f64 / last))
        .collect();
    let system_head = flow.iter().map(|q| k * q * q).collect();
    let pump_head = flow.iter().map(|q| shutoff - c * q * q).collect();

    Ok(PumpSystemCurve {
        flow,
        system_head,
        pump_head,
        operating_point: (design_flow_l_per_s, design_head_m),
        shutoff_head_m: shutoff,
        system_coefficient: k,
        pump_coefficient: c,
    })
}

/// 설계 결과로부터 곡선을 생성한다. 운전점은 구역 유량과 전양정이다.
pub fn curve_for_design(result: &DesignResult, sample_count: usize) -> CalcResult<PumpSystemCurve> {
    generate_curve_points(result.zone_flow_l_per_s, result.operating_head_m, sample_count)
}

/// 마찰손실을 유량비로 보정한 시스템 곡선 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemCurvePoint {
    /// 설계 유량 대비 비율
    pub ratio: f64,
    pub flow_gpm: f64,
    pub head_m: f64,
    pub head_ft: f64,
}

/// 각 배관 손실을 (Q/Qd)^1.852 로 보정해 TDH(Q)를 다시 구한다.
///
/// TDH(Q) = H_end + (h_lat + h_sub + h_main)·(Q/Qd)^1.852 + h_fittings
pub fn friction_scaled_system_points(
    result: &DesignResult,
    ratios: &[f64],
) -> Vec<SystemCurvePoint> {
    ratios
        .iter()
        .map(|&ratio| {
            let scale = ratio.max(0.0).powf(HW_FLOW_EXPONENT);
            let head_m = result.end_head_m
                + result.pipe_friction_loss_m() * scale
                + result.fittings_loss_m;
            SystemCurvePoint {
                ratio,
                flow_gpm: result.zone_flow_gpm * ratio,
                head_m,
                head_ft: head_m / M_PER_FT,
            }
        })
        .collect()
}
