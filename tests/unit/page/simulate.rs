use super::*;

#[test]
fn trace_goes_down_and_back_up() {
    let feed = SlideFeed::builtin().unwrap();
    let trace = simulate_scroll(&feed, PresentationConfig::default(), 30).unwrap();

    assert_eq!(trace.slide_ids.len(), feed.len());
    let peak = trace
        .frames
        .iter()
        .map(|f| f.scroll_fraction)
        .fold(0.0, f64::max);
    assert_eq!(peak, 1.0);

    let last = trace.frames.last().unwrap();
    assert_eq!(last.scroll_y, 0.0);
    assert_eq!(last.progress, 0.0);
    assert_eq!(last.guide_segment, 0);
    for w in trace.frames.windows(2) {
        assert_eq!(w[1].frame, w[0].frame + 1);
    }
}

#[test]
fn every_slide_is_revealed_on_the_way_down() {
    let feed = SlideFeed::builtin().unwrap();
    let trace = simulate_scroll(&feed, PresentationConfig::default(), 60).unwrap();
    for id in &trace.slide_ids {
        assert!(
            trace
                .frames
                .iter()
                .any(|f| f.slide(id).is_some_and(|s| s.playhead > 0.0)),
            "{id} never played"
        );
    }
}

#[test]
fn zero_frames_is_rejected() {
    let feed = SlideFeed::builtin().unwrap();
    assert!(simulate_scroll(&feed, PresentationConfig::default(), 0).is_err());
}
