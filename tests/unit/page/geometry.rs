use super::*;

#[test]
fn uniform_stack_with_footer() {
    let cfg = PresentationConfig::default();
    let g = PageGeometry::uniform(3, &cfg);
    assert_eq!(g.slide_count(), 3);
    assert_eq!(g.slide_top(2), Some(1800.0));
    assert_eq!(g.total_height(), 2788.0);
    assert_eq!(g.max_scroll(), 1888.0);
    assert_eq!(g.fraction(944.0), 0.5);
    assert_eq!(g.slide_top(3), None);
}

#[test]
fn short_page_does_not_scroll() {
    let cfg = PresentationConfig::default();
    let g = PageGeometry::uniform(0, &cfg);
    assert_eq!(g.max_scroll(), 0.0);
    assert_eq!(g.fraction(100.0), 0.0);
}

#[test]
fn scroll_to_is_clamped_to_the_page() {
    let cfg = PresentationConfig::default();
    let g = PageGeometry::uniform(3, &cfg);
    assert_eq!(g.scroll_to(1), Some(900.0));
    assert_eq!(g.scroll_to(2), Some(1800.0));

    let short = PresentationConfig {
        slide_height: Some(400.0),
        ..PresentationConfig::default()
    };
    let g = PageGeometry::uniform(2, &short);
    assert_eq!(g.max_scroll(), 0.0);
    assert_eq!(g.scroll_to(1), Some(0.0));
}

#[test]
fn trigger_regions_follow_slide_tops() {
    let cfg = PresentationConfig::default();
    let g = PageGeometry::uniform(2, &cfg);
    let r = g.trigger_region(1, &cfg).unwrap();
    assert_eq!(r.start, 900.0 - 540.0);
    assert_eq!(r.end, 1800.0 - 450.0);
}
