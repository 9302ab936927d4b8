use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 kW 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Watt,
    /// 영국 마력(mechanical hp)
    Horsepower,
}

const KW_PER_HP: f64 = 0.745_699_872;

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = match from {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Horsepower => value * KW_PER_HP,
    };
    match to {
        PowerUnit::Kilowatt => kw,
        PowerUnit::Watt => kw * 1000.0,
        PowerUnit::Horsepower => kw / KW_PER_HP,
    }
}
