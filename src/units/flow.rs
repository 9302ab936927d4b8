use serde::{Deserialize, Serialize};

use crate::irrigation::constants::{GPM_PER_M3S, HOURS_PER_DAY, SECONDS_PER_DAY};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    LiterPerSecond,
    CubicMeterPerHour,
    CubicMeterPerDay,
    /// US gal/min
    Gpm,
}

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::CubicMeterPerHour => value / (SECONDS_PER_DAY / HOURS_PER_DAY),
        FlowUnit::CubicMeterPerDay => value / SECONDS_PER_DAY,
        FlowUnit::Gpm => value / GPM_PER_M3S,
    }
}

fn from_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::CubicMeterPerHour => value * (SECONDS_PER_DAY / HOURS_PER_DAY),
        FlowUnit::CubicMeterPerDay => value * SECONDS_PER_DAY,
        FlowUnit::Gpm => value * GPM_PER_M3S,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_m3_per_s(to_m3_per_s(value, from), to)
}
