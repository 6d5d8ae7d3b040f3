use std::f64::consts::TAU;

/// Easing curves. `Out*` curves decelerate into the end state; `BackOut` and `ElasticOut`
/// overshoot before settling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutQuart,
    BackOut { overshoot: f64 },
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let amp = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let width = period / amplitude.min(1.0).max(f64::EPSILON);
    let phase = width / TAU * (1.0 / amp).asin();
    let omega = TAU / width;
    amp * 2f64.powf(-10.0 * t) * ((t - phase) * omega).sin() + 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
