//! 보고서 작성과 저장 테스트.
use sprinkler_design_toolbox::irrigation::{compute_design, DesignInput};
use sprinkler_design_toolbox::report::{
    build_report, export_report, justification, recommended_motor_hp, sizing_tables, ResultField,
};

#[test]
fn default_design_needs_five_hp_motor() {
    let r = compute_design(&DesignInput::default()).expect("design");
    assert_eq!(recommended_motor_hp(r.brake_horsepower), Some(5.0));
    assert_eq!(recommended_motor_hp(0.2), Some(1.0));
    assert_eq!(recommended_motor_hp(250.0), None);
}

#[test]
fn report_has_live_values_and_reference_section() {
    let input = DesignInput::default();
    let r = compute_design(&input).expect("design");
    let text = build_report(&input, &r).expect("report");
    assert!(text.starts_with("SPRINKLER IRRIGATION DESIGN REPORT"));
    assert!(text.contains("1. Data given"));
    assert!(text.contains("8. Reference design (fixed values)"));
    assert!(text.contains(&format!("{:.2} gpm", r.zone_flow_gpm)));
    assert!(text.contains("Recommended motor: 5 HP"));
    assert!(text.contains("* Motor = 5 HP"));
}

#[test]
fn reference_section_does_not_follow_inputs() {
    let input = DesignInput {
        field_length_ew_m: 800.0,
        ..DesignInput::default()
    };
    let r = compute_design(&input).expect("design");
    let text = build_report(&input, &r).expect("report");
    assert!(text.contains("* Zone flow = 156.35 gpm"));
    assert!(text.contains("Note: live zone flow differs from the reference"));
}

#[test]
fn sizing_loss_shrinks_with_diameter() {
    let r = compute_design(&DesignInput::default()).expect("design");
    let tables = sizing_tables(&r);
    for rows in [&tables.lateral, &tables.submain, &tables.mainline] {
        assert!(!rows.is_empty());
        for w in rows.windows(2) {
            assert!(w[1].head_loss_m < w[0].head_loss_m);
            assert!(w[1].velocity_m_per_s < w[0].velocity_m_per_s);
        }
    }
    assert!((tables.half_lateral_length_m - 100.0).abs() < 1e-12);
    assert!((tables.half_submain_length_m - 125.0).abs() < 1e-12);
}

#[test]
fn export_writes_text_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("irrigation_report.txt");
    let input = DesignInput::default();
    let r = compute_design(&input).expect("design");
    let text = build_report(&input, &r).expect("report");
    export_report(&path, &text).expect("export");
    let saved = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(saved, text);
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_such_dir").join("report.txt");
    assert!(export_report(&path, "x").is_err());
}

#[test]
fn justifications_show_the_live_numbers() {
    let input = DesignInput::default();
    let r = compute_design(&input).expect("design");
    assert_eq!(
        justification(ResultField::Area, &input, &r),
        "A = 500.0 m x 400.0 m = 200000 m^2"
    );
    let tdh = justification(ResultField::Tdh, &input, &r);
    assert!(tdh.contains("0.795 + 0.642 + 2.574 + 4.0"), "{tdh}");
    assert!(tdh.ends_with(&format!("{:.2} ft", r.operating_head_ft)), "{tdh}");
    let motor = justification(ResultField::Motor, &input, &r);
    assert!(motor.ends_with("5 HP"), "{motor}");
    let zones = justification(ResultField::ZoneFlow, &input, &r);
    assert!(zones.contains("/ 4 zones"), "{zones}");
}
