use crate::animation::smoothing::Scrub;

/// Horizontal reading-progress bar: scale 0 at the top of the page, 1 at the bottom.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct ProgressIndicator {
    scrub: Scrub,
}

impl ProgressIndicator {
    pub fn new(lag_secs: f64) -> Self {
        Self {
            scrub: Scrub::new(lag_secs, 0.0),
        }
    }

    pub fn on_scroll(&mut self, fraction: f64) {
        self.scrub.set_target(fraction.clamp(0.0, 1.0));
    }

    pub fn advance(&mut self, dt: f64) {
        self.scrub.advance(dt);
    }

    pub fn scale_x(&self) -> f64 {
        self.scrub.value()
    }

    pub fn lag_secs(&self) -> f64 {
        self.scrub.lag_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/progress.rs"]
mod tests;
