use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn viewport_requires_positive_size() {
    assert!(Viewport::new(0.0, 800.0).is_err());
    assert!(Viewport::new(1280.0, f64::NAN).is_err());
    assert!(Viewport::new(1280.0, 800.0).is_ok());
}

#[test]
fn scroll_fraction_clamps_and_handles_flat_pages() {
    assert_eq!(scroll_fraction(0.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(500.0, 1000.0), 0.5);
    assert_eq!(scroll_fraction(1200.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-10.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(300.0, 0.0), 0.0);
}
