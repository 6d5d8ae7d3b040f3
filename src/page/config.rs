use crate::{
    animation::ease::Ease,
    foundation::core::{Fps, Viewport},
    foundation::error::{ScrollshowError, ScrollshowResult},
    sequencer::trigger::TriggerConfig,
};

/// Tunables for a mounted presentation. Every field has a default, so a partial JSON object is
/// a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub viewport: Viewport,
    pub fps: Fps,
    pub trigger: TriggerConfig,
    pub progress_lag_secs: f64,
    pub guide_lag_secs: f64,
    /// Ease applied inside each guide segment.
    pub guide_ease: Ease,
    /// Height of every slide; `None` means one viewport per slide.
    pub slide_height: Option<f64>,
    pub footer_height: f64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: 1440.0,
                height: 900.0,
            },
            fps: Fps { num: 60, den: 1 },
            trigger: TriggerConfig::default(),
            progress_lag_secs: 0.3,
            guide_lag_secs: 1.5,
            guide_ease: Ease::OutQuad,
            slide_height: None,
            footer_height: 88.0,
        }
    }
}

impl PresentationConfig {
    pub fn validate(&self) -> ScrollshowResult<()> {
        Viewport::new(self.viewport.width, self.viewport.height)?;
        Fps::new(self.fps.num, self.fps.den)?;

        for (name, ratio) in [
            ("trigger.start_viewport_ratio", self.trigger.start_viewport_ratio),
            ("trigger.end_viewport_ratio", self.trigger.end_viewport_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ScrollshowError::validation(format!(
                    "{name} must be within [0, 1], got {ratio}"
                )));
            }
        }

        for (name, lag) in [
            ("progress_lag_secs", self.progress_lag_secs),
            ("guide_lag_secs", self.guide_lag_secs),
        ] {
            if !(lag.is_finite() && lag > 0.0) {
                return Err(ScrollshowError::validation(format!(
                    "{name} must be > 0, got {lag}"
                )));
            }
        }

        if let Some(h) = self.slide_height
            && !(h.is_finite() && h > 0.0)
        {
            return Err(ScrollshowError::validation(format!(
                "slide_height must be > 0, got {h}"
            )));
        }
        if !(self.footer_height.is_finite() && self.footer_height >= 0.0) {
            return Err(ScrollshowError::validation("footer_height must be >= 0"));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> ScrollshowResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader(r: impl std::io::Read) -> ScrollshowResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Seconds between frame ticks.
    pub fn frame_dt(&self) -> f64 {
        self.fps.frame_duration_secs()
    }

    pub fn effective_slide_height(&self) -> f64 {
        self.slide_height.unwrap_or(self.viewport.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
