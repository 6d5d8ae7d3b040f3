use crate::{
    animation::timeline::TargetFrame, choreography::guide::GuideState, foundation::core::Vec2,
    sequencer::controller::SlidePhase,
};

/// Everything a renderer needs to draw one frame of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub time_secs: f64,
    pub scroll_y: f64,
    pub scroll_fraction: f64,
    pub progress: f64,
    pub guide: GuideState,
    pub guide_segment: usize,
    pub cursor: Vec2,
    pub slides: Vec<SlideFrame>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideFrame {
    pub id: String,
    pub phase: SlidePhase,
    pub playhead: f64,
    pub targets: Vec<TargetFrame>,
}

impl FrameSnapshot {
    pub fn slide(&self, id: &str) -> Option<&SlideFrame> {
        self.slides.iter().find(|s| s.id == id)
    }
}
