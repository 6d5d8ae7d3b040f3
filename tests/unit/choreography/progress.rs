use super::*;

fn settle(p: &mut ProgressIndicator) {
    for _ in 0..600 {
        p.advance(1.0 / 60.0);
    }
}

#[test]
fn starts_empty_and_reaches_the_ends_exactly() {
    let mut p = ProgressIndicator::new(0.3);
    assert_eq!(p.scale_x(), 0.0);

    p.on_scroll(1.0);
    settle(&mut p);
    assert_eq!(p.scale_x(), 1.0);

    p.on_scroll(0.0);
    settle(&mut p);
    assert_eq!(p.scale_x(), 0.0);
}

#[test]
fn monotonic_while_scrolling_down() {
    let mut p = ProgressIndicator::new(0.3);
    let mut last = p.scale_x();
    for step in 0..=120 {
        p.on_scroll(step as f64 / 120.0);
        p.advance(1.0 / 60.0);
        assert!(p.scale_x() >= last);
        last = p.scale_x();
    }
}

#[test]
fn lags_behind_the_scroll() {
    let mut p = ProgressIndicator::new(0.3);
    p.on_scroll(1.0);
    p.advance(1.0 / 60.0);
    assert!(p.scale_x() > 0.0 && p.scale_x() < 0.2);
}

#[test]
fn fraction_is_clamped() {
    let mut p = ProgressIndicator::new(0.0);
    p.on_scroll(3.0);
    assert_eq!(p.scale_x(), 1.0);
    p.on_scroll(-1.0);
    assert_eq!(p.scale_x(), 0.0);
}
