//! 단위 변환 회귀 테스트.
use sprinkler_design_toolbox::conversion::{convert, convert_named, ConversionError};
use sprinkler_design_toolbox::quantity::QuantityKind;
use sprinkler_design_toolbox::units::{convert_length, convert_pressure, LengthUnit, PressureUnit};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn gpm_to_liters_per_second() {
    // 1 m³/s = 15850.323 gpm
    let lps = convert(QuantityKind::Flow, 15850.323, "gpm", "L/s").expect("flow");
    assert_close(lps, 1000.0, 1e-9);
    let gpm = convert_named("flow", 1500.0, "m3/day", "gpm").expect("flow");
    assert_close(gpm, 275.18, 0.01);
}

#[test]
fn meters_and_feet() {
    assert_close(convert_length(18.5148, LengthUnit::Meter, LengthUnit::Foot), 60.744, 1e-3);
    let m = convert(QuantityKind::Length, 1.0, "ft", "m").expect("length");
    assert_close(m, 0.3048, 1e-12);
}

#[test]
fn water_head_uses_design_rho_g() {
    let h = convert_pressure(103.0, PressureUnit::KiloPascal, PressureUnit::MeterOfWater);
    assert_close(h, 103.0 / 9.806, 1e-12);
    let psi = convert(QuantityKind::Pressure, 1.0, "bar", "psi").expect("pressure");
    assert_close(psi, 14.5038, 1e-3);
}

#[test]
fn area_power_volume() {
    assert_close(convert_named("area", 200_000.0, "m2", "acre").expect("area"), 49.42, 0.01);
    assert_close(convert_named("power", 5.0, "hp", "kW").expect("power"), 3.7285, 1e-3);
    assert_close(convert_named("volume", 1.0, "gal", "L").expect("volume"), 3.78541, 1e-9);
}

#[test]
fn unknown_names_are_reported() {
    assert!(matches!(
        convert(QuantityKind::Flow, 1.0, "furlong/s", "gpm"),
        Err(ConversionError::UnknownUnit(_))
    ));
    assert!(matches!(
        convert_named("temperature", 1.0, "C", "F"),
        Err(ConversionError::UnsupportedQuantity(_))
    ));
}
