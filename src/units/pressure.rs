use serde::{Deserialize, Serialize};

use crate::irrigation::constants::KPA_PER_M_HEAD;

/// 압력 단위. 내부 기준은 kPa(게이지)이다.
/// 수주(m H₂O)는 설계 계산과 같은 ρg 값으로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    KiloPascal,
    Pascal,
    Bar,
    Psi,
    MeterOfWater,
}

const KPA_PER_BAR: f64 = 100.0;
const KPA_PER_PSI: f64 = 6.894_76;

fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value,
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::Bar => value * KPA_PER_BAR,
        PressureUnit::Psi => value * KPA_PER_PSI,
        PressureUnit::MeterOfWater => value * KPA_PER_M_HEAD,
    }
}

fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::Bar => value_kpa / KPA_PER_BAR,
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
        PressureUnit::MeterOfWater => value_kpa / KPA_PER_M_HEAD,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_kpa(to_kpa(value, from), to)
}
