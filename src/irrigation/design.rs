use serde::{Deserialize, Serialize};

use super::constants::*;
use super::error::{check_finite, require_positive, CalcError, CalcResult};

/// 설계 계산기 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInput {
    /// 포장 동서 길이 [m]
    pub field_length_ew_m: f64,
    /// 포장 남북 폭 [m]
    pub field_width_ns_m: f64,
    /// 설계 작물 증발산량 [mm/day]
    pub et_mm_per_day: f64,
    /// 살수 증발 손실 [%], 0~100 사이
    pub evaporation_loss_percent: f64,
    /// 구역 수 (동시에 1개 구역 운전)
    pub zone_count: u32,
    /// 래터럴 말단 최소 압력 [kPa]
    pub min_end_pressure_kpa: f64,
}

impl Default for DesignInput {
    fn default() -> Self {
        Self {
            field_length_ew_m: 500.0,
            field_width_ns_m: 400.0,
            et_mm_per_day: 15.0,
            evaporation_loss_percent: 12.0,
            zone_count: 4,
            min_end_pressure_kpa: 103.0,
        }
    }
}

/// 설계 계산 결과. 입력과 상수표만으로 결정된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignResult {
    /// 포장 면적 [m²]
    pub area_m2: f64,
    /// 총 관개 깊이 [mm/day]
    pub gross_depth_mm_per_day: f64,
    /// 작물 순 소요수량 [m³/day]
    pub crop_volume_m3_per_day: f64,
    /// 증발 손실을 포함한 양수량 [m³/day]
    pub pumped_volume_m3_per_day: f64,
    pub total_flow_m3_per_s: f64,
    pub total_flow_l_per_s: f64,
    pub total_flow_m3_per_h: f64,
    pub total_flow_gpm: f64,
    pub zone_count: u32,
    /// 운전 구역 유량 [gpm]
    pub zone_flow_gpm: f64,
    /// 운전 구역 유량 [L/s]
    pub zone_flow_l_per_s: f64,
    pub sprinklers_per_zone: u32,
    pub sprinklers_total: u64,
    /// 스프링클러 1개당 토출량 [L/s]
    pub sprinkler_flow_l_per_s: f64,
    /// 래터럴 말단 필요 수두 [m]
    pub end_head_m: f64,
    pub lateral_loss_m: f64,
    pub submain_loss_m: f64,
    pub mainline_loss_m: f64,
    pub fittings_loss_m: f64,
    /// 전양정(TDH) [m]
    pub operating_head_m: f64,
    /// 전양정(TDH) [ft]
    pub operating_head_ft: f64,
    /// 축동력 [HP]
    pub brake_horsepower: f64,
    /// 구역 동서 길이 [m]
    pub zone_length_ew_m: f64,
    /// 구역 남북 길이 [m]. 래터럴은 남북 방향으로 놓인다.
    pub zone_length_ns_m: f64,
}

impl DesignResult {
    /// 배관 마찰손실 합계 [m] (피팅 제외)
    pub fn pipe_friction_loss_m(&self) -> f64 {
        self.lateral_loss_m + self.submain_loss_m + self.mainline_loss_m
    }
}

fn validate(input: &DesignInput) -> CalcResult<()> {
    require_positive("field_length_ew_m", input.field_length_ew_m)?;
    require_positive("field_width_ns_m", input.field_width_ns_m)?;
    require_positive("et_mm_per_day", input.et_mm_per_day)?;
    require_positive("evaporation_loss_percent", input.evaporation_loss_percent)?;
    require_positive("min_end_pressure_kpa", input.min_end_pressure_kpa)?;
    if input.zone_count == 0 {
        return Err(CalcError::InvalidInput {
            field: "zone_count",
            value: 0.0,
        });
    }
    Ok(())
}

/// 6개 입력값으로 관개 수리 설계값 전체를 계산한다.
///
/// 증발 손실이 100 % 이상이면 양수량을 정의할 수 없으므로 `CalcError::Computation`을 반환한다.
pub fn compute_design(input: &DesignInput) -> CalcResult<DesignResult> {
    validate(input)?;

    let evap_fraction = input.evaporation_loss_percent / 100.0;
    let delivered_fraction = 1.0 - evap_fraction;
    if delivered_fraction <= 0.0 {
        return Err(CalcError::Computation {
            description: format!(
                "증발 손실 {}%에서는 양수량을 계산할 수 없습니다 (0으로 나누기)",
                input.evaporation_loss_percent
            ),
        });
    }

    let area = input.field_length_ew_m * input.field_width_ns_m;
    let gross_depth = check_finite("gross_depth", input.et_mm_per_day / delivered_fraction)?;
    let crop_volume = area * (input.et_mm_per_day / 1000.0);
    let pumped_volume = check_finite("pumped_volume", crop_volume / delivered_fraction)?;

    let total_flow_m3s = pumped_volume / SECONDS_PER_DAY;
    let total_flow_gpm = total_flow_m3s * GPM_PER_M3S;

    let zones = f64::from(input.zone_count);
    let zone_flow_gpm = check_finite("zone_flow_gpm", total_flow_gpm / zones)?;
    let zone_flow_ls = zone_flow_gpm * (LITERS_PER_GALLON / 60.0);
    let sprinkler_flow = zone_flow_ls / f64::from(SPRINKLERS_PER_ZONE);

    // kPa → m 수두
    let end_head = check_finite("end_head", input.min_end_pressure_kpa / KPA_PER_M_HEAD)?;
    let operating_head_m =
        end_head + LATERAL_LOSS_M + SUBMAIN_LOSS_M + MAINLINE_LOSS_M + FITTINGS_LOSS_M;
    let operating_head_ft = operating_head_m / M_PER_FT;
    let bhp = check_finite(
        "brake_horsepower",
        (zone_flow_gpm * operating_head_ft) / (BHP_DENOMINATOR * PUMP_EFFICIENCY),
    )?;

    let result = DesignResult {
        area_m2: check_finite("area", area)?,
        gross_depth_mm_per_day: gross_depth,
        crop_volume_m3_per_day: check_finite("crop_volume", crop_volume)?,
        pumped_volume_m3_per_day: pumped_volume,
        total_flow_m3_per_s: total_flow_m3s,
        total_flow_l_per_s: total_flow_m3s * 1000.0,
        total_flow_m3_per_h: pumped_volume / HOURS_PER_DAY,
        total_flow_gpm: check_finite("total_flow_gpm", total_flow_gpm)?,
        zone_count: input.zone_count,
        zone_flow_gpm,
        zone_flow_l_per_s: zone_flow_ls,
        sprinklers_per_zone: SPRINKLERS_PER_ZONE,
        sprinklers_total: u64::from(SPRINKLERS_PER_ZONE) * u64::from(input.zone_count),
        sprinkler_flow_l_per_s: sprinkler_flow,
        end_head_m: end_head,
        lateral_loss_m: LATERAL_LOSS_M,
        submain_loss_m: SUBMAIN_LOSS_M,
        mainline_loss_m: MAINLINE_LOSS_M,
        fittings_loss_m: FITTINGS_LOSS_M,
        operating_head_m,
        operating_head_ft,
        brake_horsepower: bhp,
        zone_length_ew_m: input.field_length_ew_m / 2.0,
        zone_length_ns_m: input.field_width_ns_m / 2.0,
    };
    tracing::debug!(
        zone_flow_gpm = result.zone_flow_gpm,
        operating_head_m = result.operating_head_m,
        bhp = result.brake_horsepower,
        "design computed"
    );
    Ok(result)
}
