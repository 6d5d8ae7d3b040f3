use super::*;

#[test]
fn guide_trails_the_progress_bar() {
    let mut c = Choreographer::new(0.3, 1.5, Ease::OutQuad).unwrap();
    c.on_scroll(1.0);
    for _ in 0..30 {
        c.advance(1.0 / 60.0);
    }
    let f = c.frame();
    assert!(f.progress > c.guide().position());
}

#[test]
fn both_settle_on_the_same_target() {
    let mut c = Choreographer::new(0.3, 1.5, Ease::OutQuad).unwrap();
    c.on_scroll(1.0);
    for _ in 0..2000 {
        c.advance(1.0 / 60.0);
    }
    let f = c.frame();
    assert_eq!(f.progress, 1.0);
    assert_eq!(c.guide().position(), 1.0);
    assert_eq!(f.guide_segment, 5);
    assert!((f.guide.top_pct - 90.0).abs() < 1e-9);
}

#[test]
fn smoothing_factors_are_independent() {
    let mut fast = Choreographer::new(0.0, 1.5, Ease::OutQuad).unwrap();
    fast.on_scroll(0.5);
    fast.advance(1.0 / 60.0);
    assert_eq!(fast.frame().progress, 0.5);
    assert!(fast.guide().position() < 0.5);
}
