pub(crate) mod guide;
pub(crate) mod progress;

use crate::{animation::ease::Ease, foundation::error::ScrollshowResult};

use self::{
    guide::{GuidePath, GuideState, default_waypoints},
    progress::ProgressIndicator,
};

/// Page-wide scroll animations. Neither is gated by slide visibility.
#[derive(Clone, Debug)]
pub struct Choreographer {
    progress: ProgressIndicator,
    guide: GuidePath,
}

/// Sampled choreography state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ChoreographyFrame {
    pub progress: f64,
    pub guide: GuideState,
    pub guide_segment: usize,
}

impl Choreographer {
    pub fn new(
        progress_lag_secs: f64,
        guide_lag_secs: f64,
        guide_ease: Ease,
    ) -> ScrollshowResult<Self> {
        Ok(Self {
            progress: ProgressIndicator::new(progress_lag_secs),
            guide: GuidePath::new(default_waypoints(), guide_lag_secs, guide_ease)?,
        })
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    pub fn guide(&self) -> &GuidePath {
        &self.guide
    }

    pub fn on_scroll(&mut self, fraction: f64) {
        self.progress.on_scroll(fraction);
        self.guide.on_scroll(fraction);
    }

    pub fn advance(&mut self, dt: f64) {
        self.progress.advance(dt);
        self.guide.advance(dt);
    }

    pub fn frame(&self) -> ChoreographyFrame {
        ChoreographyFrame {
            progress: self.progress.scale_x(),
            guide: self.guide.state(),
            guide_segment: self.guide.segment(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/choreographer.rs"]
mod tests;
