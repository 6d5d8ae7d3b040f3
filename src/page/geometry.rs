use crate::{
    foundation::core::scroll_fraction,
    page::config::PresentationConfig,
    sequencer::trigger::TriggerRegion,
};

/// Vertical page layout: slides stacked in feed order, followed by the footer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageGeometry {
    viewport_height: f64,
    tops: Vec<f64>,
    heights: Vec<f64>,
    footer_height: f64,
}

impl PageGeometry {
    pub fn uniform(count: usize, cfg: &PresentationConfig) -> Self {
        let heights = vec![cfg.effective_slide_height(); count];
        let mut tops = Vec::with_capacity(count);
        let mut y = 0.0;
        for h in &heights {
            tops.push(y);
            y += h;
        }
        Self {
            viewport_height: cfg.viewport.height,
            tops,
            heights,
            footer_height: cfg.footer_height,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.tops.len()
    }

    pub fn total_height(&self) -> f64 {
        self.heights.iter().sum::<f64>() + self.footer_height
    }

    /// Largest reachable scroll offset; zero when the page fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    pub fn clamp_scroll(&self, scroll_y: f64) -> f64 {
        scroll_y.clamp(0.0, self.max_scroll())
    }

    pub fn fraction(&self, scroll_y: f64) -> f64 {
        scroll_fraction(scroll_y, self.max_scroll())
    }

    pub fn slide_top(&self, index: usize) -> Option<f64> {
        self.tops.get(index).copied()
    }

    pub fn slide_height(&self, index: usize) -> Option<f64> {
        self.heights.get(index).copied()
    }

    /// Scroll offset that brings a slide's top to the top of the viewport.
    pub fn scroll_to(&self, index: usize) -> Option<f64> {
        self.slide_top(index).map(|top| self.clamp_scroll(top))
    }

    pub fn trigger_region(&self, index: usize, cfg: &PresentationConfig) -> Option<TriggerRegion> {
        let top = self.slide_top(index)?;
        let height = self.slide_height(index)?;
        Some(TriggerRegion::for_slide(
            top,
            height,
            self.viewport_height,
            &cfg.trigger,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/geometry.rs"]
mod tests;
