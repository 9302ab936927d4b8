use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `gpm`, `L/s`, `m`, `ft`, `kPa`, `psi`, `acre`, `hp` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Flow => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
    }
}

/// 물리량 이름과 단위 문자열을 모두 문자열로 받아 변환한다.
pub fn convert_named(
    kind: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let kind = QuantityKind::parse(kind)
        .ok_or_else(|| ConversionError::UnsupportedQuantity(kind.to_string()))?;
    convert(kind, value, from_unit_str, to_unit_str)
}

fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "cms" => Ok(FlowUnit::CubicMeterPerSecond),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "m3/h" | "m3/hr" | "m^3/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "m3/day" | "m3/d" | "cmd" => Ok(FlowUnit::CubicMeterPerDay),
        "gpm" | "gal/min" => Ok(FlowUnit::Gpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        "mh2o" | "mwc" | "m h2o" => Ok(PressureUnit::MeterOfWater),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "acre" | "ac" => Ok(AreaUnit::Acre),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "gal" | "gallon" => Ok(VolumeUnit::UsGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "w" | "watt" => Ok(PowerUnit::Watt),
        "hp" | "horsepower" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
