//! The entrance choreography applied to every slide.
//!
//! Fixed order: media, title, subtitle, list rows or cards, accent glyph. Each step is emitted
//! only when the layout has the anchor, and each one overlaps the tail of the timeline before it.

use crate::{
    animation::{
        ease::Ease,
        state::ElementState,
        timeline::{Timeline, TimelineStep},
    },
    layout::model::{AnchorInfo, AnchorName, SlideLayout},
};

pub const REVEAL_ORDER: [AnchorName; 6] = [
    AnchorName::Media,
    AnchorName::Title,
    AnchorName::Subtitle,
    AnchorName::ItemList,
    AnchorName::CardGrid,
    AnchorName::Accent,
];

/// Builds the reveal timeline for a resolved layout.
pub fn reveal_timeline(layout: &SlideLayout) -> Timeline {
    let anchors = layout.anchors();
    let mut timeline = Timeline::new();
    for name in REVEAL_ORDER {
        let Some(info) = anchors.iter().find(|a| a.name == name) else {
            continue;
        };
        timeline.push(reveal_step(*info));
    }
    timeline
}

fn reveal_step(info: AnchorInfo) -> TimelineStep {
    let rest = ElementState::REST;
    let (from, duration, ease, offset, stagger) = match info.name {
        // settle: drops in tilted and undersized, springs into place
        AnchorName::Media => (
            rest.offset(0.0, 50.0).opacity(0.0).scale(0.8).rotation(-10.0),
            1.0,
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            },
            0.0,
            0.0,
        ),
        AnchorName::Title => (
            rest.offset(0.0, 80.0).opacity(0.0).skew_y(5.0),
            0.8,
            Ease::OutQuart,
            -0.6,
            0.0,
        ),
        AnchorName::Subtitle => (
            rest.offset(0.0, 30.0).opacity(0.0),
            0.6,
            Ease::OutCubic,
            -0.4,
            0.0,
        ),
        AnchorName::ItemList => (
            rest.offset(-50.0, 0.0).opacity(0.0),
            0.5,
            Ease::BackOut { overshoot: 1.2 },
            -0.2,
            0.15,
        ),
        AnchorName::CardGrid => (
            rest.offset(0.0, 100.0).opacity(0.0).rotation_x(20.0),
            0.8,
            Ease::OutCubic,
            -0.5,
            0.2,
        ),
        AnchorName::Accent => (
            rest.opacity(0.0).scale(0.0),
            0.5,
            Ease::BackOut { overshoot: 1.7 },
            -0.3,
            0.0,
        ),
    };

    TimelineStep {
        anchor: info.name,
        targets: info.targets,
        from,
        to: rest,
        duration,
        ease,
        offset,
        stagger,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
