use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 m² 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    Hectare,
    Acre,
    SquareFoot,
}

const M2_PER_ACRE: f64 = 4046.856_422_4;

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::Hectare => value * 10_000.0,
        AreaUnit::Acre => value * M2_PER_ACRE,
        AreaUnit::SquareFoot => value * 0.092_903_04,
    }
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::Hectare => value / 10_000.0,
        AreaUnit::Acre => value / M2_PER_ACRE,
        AreaUnit::SquareFoot => value / 0.092_903_04,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    from_square_meter(to_square_meter(value, from), to)
}
