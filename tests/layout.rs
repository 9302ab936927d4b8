//! 포장 배치도와 번역기 테스트.
use sprinkler_design_toolbox::i18n::{keys, Translator};
use sprinkler_design_toolbox::irrigation::{layout::field_layout, DesignInput};

#[test]
fn layout_splits_field_into_four_zones() {
    let input = DesignInput::default();
    let layout = field_layout(&input);
    assert_eq!(layout.zone_labels.len(), 4);
    assert_eq!(layout.submains.len(), 4);
    assert!((layout.mainline.length() - 400.0).abs() < 1e-12);
    let submain_total: f64 = layout.submains.iter().map(|s| s.length()).sum();
    assert!((submain_total - 2.0 * 500.0).abs() < 1e-9);
    for (_, (x, y)) in &layout.zone_labels {
        assert!(*x > 0.0 && *x < 500.0 && *y > 0.0 && *y < 400.0);
    }
}

#[test]
fn translator_falls_back_to_builtin_strings() {
    let en = Translator::new("en-us");
    let ko = Translator::new("ko");
    assert_eq!(en.t(keys::GUI_RUN), "Run calculations");
    assert_ne!(ko.t(keys::GUI_RUN), en.t(keys::GUI_RUN));
    assert!(en.lookup(keys::GUI_RUN).is_none());
    assert_eq!(en.language_code(), "en");
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(Translator::new("fr").language_code(), "ko");
}

#[test]
fn language_pack_overrides_builtin() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("en.toml"), "[gui]\nrun = \"Go\"\n").expect("write");
    let pack = dir.path().to_str().expect("utf-8 path");
    let tr = Translator::new_with_pack("en-us", Some(pack));
    assert_eq!(tr.t(keys::GUI_RUN), "Go");
    assert_eq!(tr.t(keys::GUI_RESULTS), "Results");
}
