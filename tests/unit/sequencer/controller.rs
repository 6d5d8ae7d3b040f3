use super::*;
use crate::content::record::{SlideKind, SlideRecord, TextContent};
use crate::content::slide::Slide;
use crate::layout::resolver::resolve_layout;
use crate::sequencer::trigger::TriggerConfig;

const DT: f64 = 1.0 / 60.0;

fn list_layout(items: usize) -> SlideLayout {
    let slide = Slide::from(SlideRecord {
        id: "list".to_string(),
        kind: SlideKind::List,
        title: "Title".to_string(),
        subtitle: Some("sub".to_string()),
        content: Some(TextContent::Many(
            (0..items).map(|i| format!("item {i}")).collect(),
        )),
        emoji: Some("🚀".to_string()),
        image: None,
        highlight: false,
        extra_data: None,
    });
    resolve_layout(&slide, 1)
}

// Slide at y=1000, 800 tall, viewport 800: region [520, 1400].
fn controller() -> SlideController {
    let region = TriggerRegion::for_slide(1000.0, 800.0, 800.0, &TriggerConfig::default());
    SlideController::new(&list_layout(3), region, ToggleActions::default())
}

fn run(c: &mut SlideController, secs: f64) -> Vec<Vec<TargetFrame>> {
    let mut frames = Vec::new();
    let mut t = 0.0;
    while t < secs {
        c.tick(DT);
        frames.push(c.sample());
        t += DT;
    }
    frames
}

#[test]
fn starts_hidden_and_plays_on_forward_entry() {
    let mut c = controller();
    assert_eq!(c.phase(), SlidePhase::Hidden);
    assert!(c.on_scroll(0.0).is_empty());
    assert_eq!(c.on_scroll(600.0), &[TriggerEvent::Enter]);
    assert_eq!(c.phase(), SlidePhase::Entering);
    let total = c.timeline().duration();
    run(&mut c, total + 0.1);
    assert_eq!(c.phase(), SlidePhase::Visible);
    assert_eq!(c.playhead(), c.timeline().duration());
}

#[test]
fn scroll_ticks_inside_the_region_do_not_restart() {
    let mut c = controller();
    c.on_scroll(600.0);
    run(&mut c, 0.5);
    let head = c.playhead();
    for y in [610.0, 700.0, 900.0, 1200.0] {
        assert!(c.on_scroll(y).is_empty());
    }
    assert_eq!(c.playhead(), head);
    assert_eq!(c.phase(), SlidePhase::Entering);
}

#[test]
fn leaving_forward_and_entering_back_keep_it_visible() {
    let mut c = controller();
    c.on_scroll(600.0);
    run(&mut c, 5.0);
    c.on_scroll(2000.0);
    assert_eq!(c.phase(), SlidePhase::Visible);
    c.on_scroll(1000.0);
    assert_eq!(c.phase(), SlidePhase::Visible);
}

#[test]
fn backward_exit_reverses_to_hidden() {
    let mut c = controller();
    c.on_scroll(600.0);
    run(&mut c, 5.0);
    assert_eq!(c.on_scroll(100.0), &[TriggerEvent::LeaveBack]);
    assert_eq!(c.phase(), SlidePhase::Exiting);
    run(&mut c, 5.0);
    assert_eq!(c.phase(), SlidePhase::Hidden);
    assert_eq!(c.playhead(), 0.0);
}

#[test]
fn reentry_mid_reverse_resumes_forward() {
    let mut c = controller();
    c.on_scroll(600.0);
    run(&mut c, 5.0);
    c.on_scroll(100.0);
    run(&mut c, 0.3);
    let head = c.playhead();
    assert!(head > 0.0);
    c.on_scroll(600.0);
    assert_eq!(c.phase(), SlidePhase::Entering);
    assert_eq!(c.playhead(), head);
    assert_eq!(c.entries(), 1);
}

#[test]
fn reentry_after_full_exit_replays_identically() {
    let mut c = controller();
    c.on_scroll(600.0);
    let first = run(&mut c, 3.0);

    c.on_scroll(0.0);
    run(&mut c, 5.0);
    assert_eq!(c.phase(), SlidePhase::Hidden);

    c.on_scroll(600.0);
    let second = run(&mut c, 3.0);
    assert_eq!(first, second);
    assert_eq!(c.entries(), 2);
}

#[test]
fn jumping_over_the_region_still_reveals() {
    let mut c = controller();
    assert_eq!(
        c.on_scroll(5000.0),
        &[TriggerEvent::Enter, TriggerEvent::Leave]
    );
    assert_eq!(c.phase(), SlidePhase::Entering);
}

#[test]
fn step_order_holds_under_fast_ticks() {
    let mut c = controller();
    c.on_scroll(600.0);
    c.tick(10.0);
    assert_eq!(c.phase(), SlidePhase::Visible);
    assert_eq!(
        c.timeline().anchor_order(),
        vec![
            crate::AnchorName::Media,
            crate::AnchorName::Title,
            crate::AnchorName::Subtitle,
            crate::AnchorName::ItemList
        ]
    );
}

#[test]
fn rebuild_starts_over_hidden() {
    let mut c = controller();
    c.on_scroll(600.0);
    run(&mut c, 5.0);
    let region = c.region();
    c.rebuild(&list_layout(5), region);
    assert_eq!(c.phase(), SlidePhase::Hidden);
    assert_eq!(c.playhead(), 0.0);
    assert_eq!(c.timeline().steps()[3].step.targets, 5);
    c.on_scroll(600.0);
    assert_eq!(c.phase(), SlidePhase::Entering);
}

#[test]
fn custom_actions_are_honored() {
    let region = TriggerRegion::for_slide(1000.0, 800.0, 800.0, &TriggerConfig::default());
    let actions = ToggleActions {
        on_enter: ToggleAction::Complete,
        on_leave: ToggleAction::Reset,
        on_enter_back: ToggleAction::Restart,
        on_leave_back: ToggleAction::None,
    };
    let mut c = SlideController::new(&list_layout(1), region, actions);
    c.on_scroll(600.0);
    assert_eq!(c.phase(), SlidePhase::Visible);
    c.on_scroll(2000.0);
    assert_eq!(c.phase(), SlidePhase::Hidden);
    c.on_scroll(1000.0);
    assert_eq!(c.phase(), SlidePhase::Entering);
}
