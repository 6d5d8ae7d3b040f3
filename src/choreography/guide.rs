use crate::{
    animation::{
        anim::{Keyframe, Keyframes, Lerp},
        ease::Ease,
        smoothing::Scrub,
    },
    foundation::core::Rgba8,
    foundation::error::{ScrollshowError, ScrollshowResult},
};

/// Number of equal-width scroll segments the guide travels through.
pub const GUIDE_SEGMENTS: usize = 6;

const YELLOW: Rgba8 = Rgba8::rgb(0xfc, 0xd7, 0x4f);
const PURPLE: Rgba8 = Rgba8::rgb(0x32, 0x01, 0x33);

/// Visual state of the floating guide element. Positions are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideState {
    pub top_pct: f64,
    pub left_pct: f64,
    pub scale: f64,
    pub color: Rgba8,
    pub corner_radius_pct: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

impl Lerp for GuideState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            top_pct: <f64 as Lerp>::lerp(&a.top_pct, &b.top_pct, t),
            left_pct: <f64 as Lerp>::lerp(&a.left_pct, &b.left_pct, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            color: Rgba8::lerp(&a.color, &b.color, t),
            corner_radius_pct: <f64 as Lerp>::lerp(&a.corner_radius_pct, &b.corner_radius_pct, t),
            rotation_deg: <f64 as Lerp>::lerp(&a.rotation_deg, &b.rotation_deg, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// Start state plus one waypoint per segment end.
pub fn default_waypoints() -> Vec<GuideState> {
    let start = GuideState {
        top_pct: 5.0,
        left_pct: 5.0,
        scale: 1.0,
        color: YELLOW,
        corner_radius_pct: 50.0,
        rotation_deg: 0.0,
        opacity: 0.8,
    };
    let w1 = GuideState {
        top_pct: 15.0,
        left_pct: 80.0,
        scale: 2.0,
        color: PURPLE,
        rotation_deg: 90.0,
        ..start
    };
    let w2 = GuideState {
        top_pct: 30.0,
        left_pct: 15.0,
        scale: 1.0,
        color: YELLOW,
        corner_radius_pct: 0.0,
        rotation_deg: 180.0,
        ..w1
    };
    let w3 = GuideState {
        top_pct: 45.0,
        left_pct: 85.0,
        scale: 1.5,
        color: PURPLE,
        corner_radius_pct: 50.0,
        rotation_deg: 270.0,
        ..w2
    };
    let w4 = GuideState {
        top_pct: 60.0,
        left_pct: 50.0,
        scale: 3.0,
        opacity: 0.05,
        ..w3
    };
    let w5 = GuideState {
        top_pct: 75.0,
        left_pct: 20.0,
        scale: 1.2,
        opacity: 0.8,
        color: YELLOW,
        ..w4
    };
    let w6 = GuideState {
        top_pct: 90.0,
        left_pct: 50.0,
        scale: 0.5,
        color: PURPLE,
        ..w5
    };
    vec![start, w1, w2, w3, w4, w5, w6]
}

/// Waypoint path over the whole page scroll, smoothed independently of the progress bar.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GuidePath {
    track: Keyframes<GuideState>,
    scrub: Scrub,
}

impl GuidePath {
    /// `waypoints` must hold exactly `GUIDE_SEGMENTS + 1` states; they are spread at `i / 6`
    /// and `ease` shapes the motion inside each segment.
    pub fn new(waypoints: Vec<GuideState>, lag_secs: f64, ease: Ease) -> ScrollshowResult<Self> {
        if waypoints.len() != GUIDE_SEGMENTS + 1 {
            return Err(ScrollshowError::validation(format!(
                "guide path needs {} waypoints, got {}",
                GUIDE_SEGMENTS + 1,
                waypoints.len()
            )));
        }
        let keys = waypoints
            .into_iter()
            .enumerate()
            .map(|(i, value)| Keyframe {
                at: i as f64 / GUIDE_SEGMENTS as f64,
                value,
                ease,
            })
            .collect();
        let track = Keyframes { keys };
        track.validate()?;
        Ok(Self {
            track,
            scrub: Scrub::new(lag_secs, 0.0),
        })
    }

    pub fn keyframes(&self) -> &Keyframes<GuideState> {
        &self.track
    }

    pub fn on_scroll(&mut self, fraction: f64) {
        self.scrub.set_target(fraction.clamp(0.0, 1.0));
    }

    pub fn advance(&mut self, dt: f64) {
        self.scrub.advance(dt);
    }

    /// Smoothed scroll fraction currently driving the path.
    pub fn position(&self) -> f64 {
        self.scrub.value()
    }

    pub fn segment(&self) -> usize {
        self.track.segment_at(self.position())
    }

    pub fn state(&self) -> GuideState {
        self.state_at(self.position())
    }

    /// Unsmoothed state at a scroll fraction.
    pub fn state_at(&self, fraction: f64) -> GuideState {
        // keys are validated non-empty in `new`
        self.track
            .sample(fraction.clamp(0.0, 1.0))
            .unwrap_or_else(|| self.track.keys[0].value)
    }

    pub fn lag_secs(&self) -> f64 {
        self.scrub.lag_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/guide.rs"]
mod tests;
