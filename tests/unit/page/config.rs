use super::*;

#[test]
fn defaults_validate() {
    let cfg = PresentationConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.effective_slide_height(), 900.0);
    assert!((cfg.frame_dt() - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = PresentationConfig::from_json_str(
        r#"{ "guide_lag_secs": 2.0, "trigger": { "start_viewport_ratio": 0.8 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.guide_lag_secs, 2.0);
    assert_eq!(cfg.progress_lag_secs, 0.3);
    assert_eq!(cfg.trigger.start_viewport_ratio, 0.8);
    assert_eq!(cfg.trigger.end_viewport_ratio, 0.5);
}

#[test]
fn rejects_out_of_range_values() {
    let bad = [
        r#"{ "viewport": { "width": 0, "height": 900 } }"#,
        r#"{ "fps": { "num": 60, "den": 0 } }"#,
        r#"{ "trigger": { "end_viewport_ratio": 1.5 } }"#,
        r#"{ "progress_lag_secs": 0 }"#,
        r#"{ "slide_height": -10 }"#,
        r#"{ "footer_height": -1 }"#,
    ];
    for json in bad {
        let err = PresentationConfig::from_json_str(json).unwrap_err();
        assert!(
            err.to_string().starts_with("validation error:"),
            "{json}: {err}"
        );
    }
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = PresentationConfig::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn guide_ease_is_configurable() {
    assert_eq!(PresentationConfig::default().guide_ease, Ease::OutQuad);
    let cfg = PresentationConfig::from_json_str(r#"{ "guide_ease": "InOutCubic" }"#).unwrap();
    assert_eq!(cfg.guide_ease, Ease::InOutCubic);
}
