use serde::Serialize;

use super::constants::{G, LATERAL_LOSS_M};
use super::curves::require_sample_count;
use super::design::DesignResult;
use super::error::{check_finite, require_positive, CalcResult};

/// 래터럴 압력 분포 기본 샘플 수
pub const DEFAULT_PROFILE_SAMPLES: usize = 41;

/// 래터럴을 따라가는 압력 분포.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureProfile {
    /// 래터럴 입구로부터의 거리 [m]
    pub distance: Vec<f64>,
    /// 압력 [kPa]
    pub pressure: Vec<f64>,
    /// 입구 압력 [kPa]
    pub start_pressure_kpa: f64,
    /// 말단 압력 [kPa]
    pub end_pressure_kpa: f64,
}

/// 래터럴 입구에서 말단까지 압력이 선형으로 감소한다고 보고 분포를 만든다.
///
/// 입구 압력 = 말단 압력 + 래터럴 고정 손실수두 × g. 마찰손실이 길이 방향으로 균일하다는
/// 단순화이며 관 마찰식의 해는 아니다.
pub fn generate_pressure_profile(
    end_pressure_kpa: f64,
    lateral_length_m: f64,
    sample_count: usize,
) -> CalcResult<PressureProfile> {
    require_positive("end_pressure_kpa", end_pressure_kpa)?;
    require_positive("lateral_length_m", lateral_length_m)?;
    require_sample_count(sample_count)?;

    let drop_kpa = LATERAL_LOSS_M * G;
    let start = check_finite("start_pressure", end_pressure_kpa + drop_kpa)?;
    let last = (sample_count - 1) as f64;

    let mut distance = Vec::with_capacity(sample_count);
    let mut pressure = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f64 / last;
        distance.push(lateral_length_m * t);
        // t=1에서 말단 압력과 정확히 일치하도록 말단 기준으로 더한다
        pressure.push(end_pressure_kpa + drop_kpa * (1.0 - t));
    }

    Ok(PressureProfile {
        distance,
        pressure,
        start_pressure_kpa: start,
        end_pressure_kpa,
    })
}

/// 설계 입력의 말단 압력과 구역 남북 길이(래터럴 길이)로 분포를 만든다.
pub fn profile_for_design(
    end_pressure_kpa: f64,
    result: &DesignResult,
    sample_count: usize,
) -> CalcResult<PressureProfile> {
    generate_pressure_profile(end_pressure_kpa, result.zone_length_ns_m, sample_count)
}
