//! 설정 파일 로드/저장 테스트.
use sprinkler_design_toolbox::config::{load_or_default_from, Config, UnitSystem};
use sprinkler_design_toolbox::irrigation::DesignInput;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_from(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
    assert_eq!(cfg.last_input, DesignInput::default());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        unit_system: UnitSystem::UsCustomary,
        language: "en".into(),
        curve_samples: 31,
        last_input: DesignInput {
            zone_count: 6,
            et_mm_per_day: 8.5,
            ..DesignInput::default()
        },
        ..Config::default()
    };
    cfg.save_to(&path).expect("save");
    let loaded = load_or_default_from(&path).expect("load");
    assert_eq!(loaded.unit_system, UnitSystem::UsCustomary);
    assert_eq!(loaded.language, "en");
    assert_eq!(loaded.curve_samples, 31);
    assert_eq!(loaded.last_input, cfg.last_input);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = \"UsCustomary\"\n[last_input]\nzone_count = 2\n")
        .expect("write");
    let cfg = load_or_default_from(&path).expect("load");
    assert_eq!(cfg.unit_system, UnitSystem::UsCustomary);
    assert_eq!(cfg.last_input.zone_count, 2);
    assert_eq!(cfg.last_input.field_length_ew_m, 500.0);
    assert_eq!(cfg.profile_samples, Config::default().profile_samples);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = [").expect("write");
    assert!(load_or_default_from(&path).is_err());
}
