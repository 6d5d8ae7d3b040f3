/// Distance below which a scrub snaps onto its target.
pub const SETTLE_EPSILON: f64 = 1e-4;

/// Damped follower: the displayed value chases a driving value with a time constant of
/// `lag_secs`, so motion trails the scroll position instead of jumping with it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Scrub {
    lag_secs: f64,
    value: f64,
    target: f64,
}

impl Scrub {
    pub fn new(lag_secs: f64, initial: f64) -> Self {
        Self {
            lag_secs: lag_secs.max(0.0),
            value: initial,
            target: initial,
        }
    }

    pub fn lag_secs(&self) -> f64 {
        self.lag_secs
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        if self.lag_secs == 0.0 {
            self.value = target;
        }
    }

    /// Moves the value toward the target over `dt` seconds and returns it.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 {
            return self.value;
        }
        if self.lag_secs == 0.0 {
            self.value = self.target;
            return self.value;
        }
        let alpha = 1.0 - (-dt / self.lag_secs).exp();
        self.value += (self.target - self.value) * alpha;
        if (self.target - self.value).abs() < SETTLE_EPSILON {
            self.value = self.target;
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoothing.rs"]
mod tests;
