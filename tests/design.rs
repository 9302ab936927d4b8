//! 설계 계산 회귀 테스트.
use sprinkler_design_toolbox::irrigation::{
    compute_design, constants::SPRINKLERS_PER_ZONE, CalcError, DesignInput,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn input(length: f64, width: f64, et: f64, evap: f64, zones: u32, end_kpa: f64) -> DesignInput {
    DesignInput {
        field_length_ew_m: length,
        field_width_ns_m: width,
        et_mm_per_day: et,
        evaporation_loss_percent: evap,
        zone_count: zones,
        min_end_pressure_kpa: end_kpa,
    }
}

#[test]
fn small_et_scenario_volumes_and_flow() {
    let r = compute_design(&input(500.0, 400.0, 6.0, 20.0, 4, 103.0)).expect("design");
    assert_close(r.area_m2, 200_000.0, 1e-9);
    assert_close(r.crop_volume_m3_per_day, 1200.0, 1e-9);
    assert_close(r.pumped_volume_m3_per_day, 1500.0, 1e-9);
    assert_close(r.total_flow_gpm, 275.18, 0.01);
    assert_close(r.zone_flow_gpm * 4.0, r.total_flow_gpm, 1e-9);
}

#[test]
fn default_input_matches_hand_calculation() {
    let r = compute_design(&DesignInput::default()).expect("design");
    assert_close(r.pumped_volume_m3_per_day, 3000.0 / 0.88, 1e-9);
    assert_close(r.total_flow_gpm, 625.41, 0.01);
    assert_close(r.zone_flow_gpm, 156.35, 0.01);
    assert_close(r.end_head_m, 10.5038, 1e-4);
    assert_close(r.operating_head_m, 18.5148, 1e-4);
    assert_close(r.operating_head_ft, 60.744, 1e-3);
    assert_close(r.brake_horsepower, 3.43, 0.01);
    // 1 - 0.12 손실 보정
    assert_close(r.gross_depth_mm_per_day, 15.0 / 0.88, 1e-9);
}

#[test]
fn gpm_follows_from_pumped_volume_exactly() {
    let r = compute_design(&input(321.0, 123.0, 7.3, 9.0, 3, 150.0)).expect("design");
    let expected = (r.pumped_volume_m3_per_day / 86400.0) * 15850.323;
    assert_eq!(r.total_flow_gpm, expected);
}

#[test]
fn pumped_volume_never_below_crop_volume() {
    for evap in [0.5, 5.0, 12.0, 50.0, 99.0] {
        let r = compute_design(&input(500.0, 400.0, 15.0, evap, 4, 103.0)).expect("design");
        assert!(
            r.pumped_volume_m3_per_day >= r.crop_volume_m3_per_day,
            "evap={evap}"
        );
    }
}

#[test]
fn zone_flow_times_zone_count_is_total() {
    for zones in [1, 2, 4, 7] {
        let r = compute_design(&input(500.0, 400.0, 15.0, 12.0, zones, 103.0)).expect("design");
        assert_close(r.zone_flow_gpm * f64::from(zones), r.total_flow_gpm, 1e-9);
    }
}

#[test]
fn sprinkler_count_is_fixed_grid() {
    for (l, w) in [(500.0, 400.0), (50.0, 20.0), (2000.0, 1500.0)] {
        let r = compute_design(&input(l, w, 15.0, 12.0, 4, 103.0)).expect("design");
        assert_eq!(r.sprinklers_per_zone, 1353);
        assert_eq!(SPRINKLERS_PER_ZONE, 33 * 41);
    }
}

#[test]
fn sprinkler_total_does_not_saturate() {
    let r = compute_design(&input(500.0, 400.0, 15.0, 12.0, u32::MAX, 103.0)).expect("design");
    assert_eq!(r.sprinklers_total, 1353 * u64::from(u32::MAX));
    assert_eq!(r.sprinklers_total, 5_811_090_750_135);
}

#[test]
fn full_evaporation_loss_is_a_computation_error() {
    let err = compute_design(&input(500.0, 400.0, 15.0, 100.0, 4, 103.0)).unwrap_err();
    assert!(matches!(err, CalcError::Computation { .. }), "{err:?}");
    let err = compute_design(&input(500.0, 400.0, 15.0, 150.0, 4, 103.0)).unwrap_err();
    assert!(matches!(err, CalcError::Computation { .. }), "{err:?}");
}

#[test]
fn non_positive_inputs_are_rejected() {
    let cases = [
        input(0.0, 400.0, 15.0, 12.0, 4, 103.0),
        input(500.0, -1.0, 15.0, 12.0, 4, 103.0),
        input(500.0, 400.0, f64::NAN, 12.0, 4, 103.0),
        input(500.0, 400.0, 15.0, 0.0, 4, 103.0),
        input(500.0, 400.0, 15.0, 12.0, 0, 103.0),
        input(500.0, 400.0, 15.0, 12.0, 4, f64::INFINITY),
    ];
    for case in cases {
        let err = compute_design(&case).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }), "{case:?} -> {err:?}");
    }
}

#[test]
fn repeated_calls_are_identical() {
    let i = DesignInput::default();
    let a = compute_design(&i).expect("first");
    let b = compute_design(&i).expect("second");
    assert_eq!(a, b);
}
