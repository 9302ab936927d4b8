//! 펌프/시스템 곡선과 압력 분포 테스트.
use sprinkler_design_toolbox::irrigation::{
    compute_design, curve_for_design, friction_scaled_system_points, generate_curve_points,
    generate_pressure_profile, profile_for_design, CalcError, DesignInput,
    DEFAULT_CURVE_SAMPLES, DEFAULT_PROFILE_SAMPLES,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn curves_cross_at_design_point() {
    let qd = 9.86;
    let hd = 18.51;
    let curve = generate_curve_points(qd, hd, DEFAULT_CURVE_SAMPLES).expect("curve");
    assert_eq!(curve.flow.len(), DEFAULT_CURVE_SAMPLES);
    assert_eq!(curve.system_head.len(), DEFAULT_CURVE_SAMPLES);
    assert_eq!(curve.pump_head.len(), DEFAULT_CURVE_SAMPLES);
    assert_close(curve.system_head_at(qd), hd, 1e-9);
    assert_close(curve.pump_head_at(qd), hd, 1e-9);
    assert_eq!(curve.operating_point, (qd, hd));
}

#[test]
fn generated_arrays_hit_design_point_on_sample_grid() {
    // 18개 샘플이면 간격이 0.1·Qd 이므로 10번 인덱스가 설계 유량이다
    let qd = 9.86;
    let hd = 18.51;
    let curve = generate_curve_points(qd, hd, 18).expect("curve");
    assert_close(curve.flow[10], qd, 1e-12);
    assert_close(curve.system_head[10], hd, 1e-9);
    assert_close(curve.pump_head[10], hd, 1e-9);
    for (i, q) in curve.flow.iter().enumerate() {
        assert_close(*q, 0.1 * qd * i as f64, 1e-12);
    }
}

#[test]
fn curve_endpoints() {
    let curve = generate_curve_points(10.0, 20.0, 11).expect("curve");
    assert_eq!(curve.flow[0], 0.0);
    assert_eq!(curve.system_head[0], 0.0);
    assert_close(curve.pump_head[0], 25.0, 1e-12);
    assert_close(curve.shutoff_head_m, 1.25 * 20.0, 1e-12);
    assert_close(*curve.flow.last().expect("last"), 17.0, 1e-12);
}

#[test]
fn system_curve_rises_and_pump_curve_falls() {
    let curve = generate_curve_points(10.0, 20.0, 51).expect("curve");
    for w in curve.system_head.windows(2) {
        assert!(w[1] >= w[0]);
    }
    for w in curve.pump_head.windows(2) {
        assert!(w[1] <= w[0]);
    }
}

#[test]
fn zero_design_flow_is_a_computation_error() {
    let err = generate_curve_points(0.0, 20.0, 11).unwrap_err();
    assert!(matches!(err, CalcError::Computation { .. }), "{err:?}");
}

#[test]
fn huge_design_flow_is_a_computation_error() {
    let err = generate_curve_points(1e200, 20.0, 11).unwrap_err();
    assert!(matches!(err, CalcError::Computation { .. }), "{err:?}");
    let err = generate_curve_points(1e-200, 20.0, 11).unwrap_err();
    assert!(matches!(err, CalcError::Computation { .. }), "{err:?}");
}

#[test]
fn bad_curve_arguments_are_invalid_input() {
    for (q, h, n) in [(-1.0, 20.0, 11), (10.0, f64::NAN, 11), (10.0, 20.0, 1)] {
        let err = generate_curve_points(q, h, n).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }), "{err:?}");
    }
}

#[test]
fn design_curve_uses_zone_flow_and_tdh() {
    let r = compute_design(&DesignInput::default()).expect("design");
    let curve = curve_for_design(&r, 21).expect("curve");
    assert_eq!(curve.operating_point, (r.zone_flow_l_per_s, r.operating_head_m));
}

#[test]
fn friction_scaled_points_pass_through_design_head() {
    let r = compute_design(&DesignInput::default()).expect("design");
    let pts = friction_scaled_system_points(&r, &[0.8, 1.0, 1.2]);
    assert_eq!(pts.len(), 3);
    assert_close(pts[1].head_m, r.operating_head_m, 1e-9);
    assert_close(pts[1].flow_gpm, r.zone_flow_gpm, 1e-9);
    assert!(pts[0].head_m < pts[1].head_m && pts[1].head_m < pts[2].head_m);
}

#[test]
fn pressure_profile_drops_to_end_pressure() {
    let p = generate_pressure_profile(103.0, 200.0, DEFAULT_PROFILE_SAMPLES).expect("profile");
    assert_eq!(p.distance.len(), DEFAULT_PROFILE_SAMPLES);
    assert_eq!(p.pressure.len(), DEFAULT_PROFILE_SAMPLES);
    assert!(p.pressure[0] > *p.pressure.last().expect("last"));
    assert_eq!(*p.pressure.last().expect("last"), 103.0);
    assert_eq!(p.distance[0], 0.0);
    assert_close(*p.distance.last().expect("last"), 200.0, 1e-12);
    // 0.795 m × 9.806 kPa/m
    assert_close(p.start_pressure_kpa - p.end_pressure_kpa, 0.795 * 9.806, 1e-9);
    assert_close(p.pressure[0], p.start_pressure_kpa, 1e-12);
}

#[test]
fn design_profile_runs_along_zone_width() {
    let input = DesignInput::default();
    let r = compute_design(&input).expect("design");
    let p = profile_for_design(input.min_end_pressure_kpa, &r, 5).expect("profile");
    assert_close(*p.distance.last().expect("last"), 200.0, 1e-12);
}

#[test]
fn profile_rejects_bad_arguments() {
    assert!(generate_pressure_profile(0.0, 200.0, 10).is_err());
    assert!(generate_pressure_profile(103.0, -5.0, 10).is_err());
    assert!(generate_pressure_profile(103.0, 200.0, 1).is_err());
}
