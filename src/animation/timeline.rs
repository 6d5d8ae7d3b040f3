use crate::{
    animation::{anim::Lerp, ease::Ease, state::ElementState},
    layout::model::AnchorName,
};

/// One reveal instruction over an anchor's targets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineStep {
    pub anchor: AnchorName,
    /// Individually animated elements under the anchor (list rows, cards, or 1).
    pub targets: usize,
    pub from: ElementState,
    pub to: ElementState,
    /// Seconds per target.
    pub duration: f64,
    pub ease: Ease,
    /// Start relative to the end of the timeline built so far; negative overlaps it.
    pub offset: f64,
    /// Delay between consecutive targets.
    pub stagger: f64,
}

impl TimelineStep {
    /// Time from the first target starting to the last target finishing.
    pub fn span(&self) -> f64 {
        self.duration + self.stagger * self.targets.saturating_sub(1) as f64
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedStep {
    pub start: f64,
    pub step: TimelineStep,
}

/// Ordered steps with absolute start times.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    steps: Vec<PlacedStep>,
    duration: f64,
}

/// Sampled state of one target at a playhead position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetFrame {
    pub anchor: AnchorName,
    pub target: usize,
    pub state: ElementState,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step. The first step starts at 0; later ones at `end + offset`, never before 0.
    pub fn push(&mut self, step: TimelineStep) -> &mut Self {
        let start = if self.steps.is_empty() {
            0.0
        } else {
            (self.duration + step.offset).max(0.0)
        };
        self.duration = self.duration.max(start + step.span());
        self.steps.push(PlacedStep { start, step });
        self
    }

    pub fn steps(&self) -> &[PlacedStep] {
        &self.steps
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Anchors in reveal order.
    pub fn anchor_order(&self) -> Vec<AnchorName> {
        self.steps.iter().map(|p| p.step.anchor).collect()
    }

    /// Samples every target at `time`. Targets that have not started sit at their `from` state.
    pub fn sample(&self, time: f64) -> Vec<TargetFrame> {
        let mut out = Vec::new();
        for placed in &self.steps {
            let step = &placed.step;
            for target in 0..step.targets {
                let begin = placed.start + step.stagger * target as f64;
                let t = if step.duration <= 0.0 {
                    if time >= begin { 1.0 } else { 0.0 }
                } else {
                    ((time - begin) / step.duration).clamp(0.0, 1.0)
                };
                out.push(TargetFrame {
                    anchor: step.anchor,
                    target,
                    state: ElementState::lerp(&step.from, &step.to, step.ease.apply(t)),
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
