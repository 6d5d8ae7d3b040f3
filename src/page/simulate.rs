use crate::{
    content::feed::SlideFeed,
    foundation::core::Vec2,
    foundation::error::{ScrollshowError, ScrollshowResult},
    page::{
        config::PresentationConfig,
        hub::{InputEvent, InputHub},
        runtime::mount,
        snapshot::FrameSnapshot,
    },
};

/// Recorded scroll session: the config it ran with and one snapshot per frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationTrace {
    pub config: PresentationConfig,
    pub slide_ids: Vec<String>,
    pub frames: Vec<FrameSnapshot>,
}

impl SimulationTrace {
    pub fn to_json_pretty(&self) -> ScrollshowResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> ScrollshowResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Scrolls top to bottom and back over `frames_per_leg` frames each way, then lets every
/// animation settle. The pointer follows a diagonal across the viewport.
#[tracing::instrument(skip(feed, config), fields(slides = feed.len()))]
pub fn simulate_scroll(
    feed: &SlideFeed,
    config: PresentationConfig,
    frames_per_leg: u32,
) -> ScrollshowResult<SimulationTrace> {
    if frames_per_leg == 0 {
        return Err(ScrollshowError::validation("frames_per_leg must be > 0"));
    }
    let hub = InputHub::new();
    let page = mount(&hub, feed, config.clone())?;
    let max_scroll = page.handle().max_scroll();
    let dt = config.frame_dt();
    let viewport = config.viewport;
    let legs = f64::from(frames_per_leg);

    let mut frames = Vec::new();
    let mut step = |y: f64, t: f64| {
        hub.dispatch(InputEvent::Scroll { y });
        hub.dispatch(InputEvent::PointerMove {
            position: Vec2::new(viewport.width * t, viewport.height * t),
        });
        hub.dispatch(InputEvent::Frame { dt });
        frames.push(page.snapshot());
    };

    for i in 0..=frames_per_leg {
        let t = f64::from(i) / legs;
        step(max_scroll * t, t);
    }
    for i in (0..frames_per_leg).rev() {
        let t = f64::from(i) / legs;
        step(max_scroll * t, t);
    }
    let settle_frames = (config.guide_lag_secs.max(config.progress_lag_secs) * 12.0 / dt).ceil();
    for _ in 0..settle_frames as u64 {
        step(0.0, 0.0);
    }

    tracing::debug!(frames = frames.len(), "simulation finished");
    Ok(SimulationTrace {
        config,
        slide_ids: feed.slides().iter().map(|s| s.id.clone()).collect(),
        frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/page/simulate.rs"]
mod tests;
