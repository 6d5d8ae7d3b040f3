use crate::{
    animation::{
        reveal::reveal_timeline,
        timeline::{TargetFrame, Timeline},
    },
    layout::model::SlideLayout,
    sequencer::trigger::{ToggleAction, ToggleActions, TriggerEvent, TriggerRegion, Zone},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidePhase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

/// Reveal state machine for one slide.
///
/// Scroll samples move the slide between trigger zones; only zone crossings change direction.
/// Frame ticks move the playhead. Slides never look at each other.
#[derive(Clone, Debug)]
pub struct SlideController {
    id: String,
    timeline: Timeline,
    region: TriggerRegion,
    actions: ToggleActions,
    zone: Zone,
    phase: SlidePhase,
    playhead: f64,
    entries: u32,
}

impl SlideController {
    pub fn new(layout: &SlideLayout, region: TriggerRegion, actions: ToggleActions) -> Self {
        Self {
            id: layout.id.clone(),
            timeline: reveal_timeline(layout),
            region,
            actions,
            zone: Zone::Before,
            phase: SlidePhase::Hidden,
            playhead: 0.0,
            entries: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn region(&self) -> TriggerRegion {
        self.region
    }

    /// Times the reveal has started from fully hidden.
    pub fn entries(&self) -> u32 {
        self.entries
    }

    /// Feeds a scroll sample; returns the crossings it caused.
    pub fn on_scroll(&mut self, scroll_y: f64) -> &'static [TriggerEvent] {
        let zone = self.region.zone(scroll_y);
        let events = TriggerRegion::crossings(self.zone, zone);
        self.zone = zone;
        for &event in events {
            self.apply(self.actions.action_for(event));
        }
        events
    }

    /// Advances the playhead by `dt` seconds in the current direction.
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let end = self.timeline.duration();
        match self.phase {
            SlidePhase::Entering => {
                self.playhead = (self.playhead + dt).min(end);
                if self.playhead >= end {
                    self.set_phase(SlidePhase::Visible);
                }
            }
            SlidePhase::Exiting => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.set_phase(SlidePhase::Hidden);
                }
            }
            SlidePhase::Hidden | SlidePhase::Visible => {}
        }
    }

    pub fn sample(&self) -> Vec<TargetFrame> {
        self.timeline.sample(self.playhead)
    }

    /// Replaces the timeline wholesale after a content change. The slide starts over hidden and
    /// re-evaluates its zone on the next scroll sample.
    pub fn rebuild(&mut self, layout: &SlideLayout, region: TriggerRegion) {
        tracing::debug!(id = %self.id, "rebuilding slide timeline");
        self.id = layout.id.clone();
        self.timeline = reveal_timeline(layout);
        self.region = region;
        self.zone = Zone::Before;
        self.phase = SlidePhase::Hidden;
        self.playhead = 0.0;
    }

    fn apply(&mut self, action: ToggleAction) {
        let end = self.timeline.duration();
        match action {
            ToggleAction::Play => match self.phase {
                SlidePhase::Hidden | SlidePhase::Exiting => self.run_forward(),
                SlidePhase::Entering | SlidePhase::Visible => {}
            },
            ToggleAction::Reverse => match self.phase {
                SlidePhase::Visible | SlidePhase::Entering => {
                    if self.playhead <= 0.0 {
                        self.set_phase(SlidePhase::Hidden);
                    } else {
                        self.set_phase(SlidePhase::Exiting);
                    }
                }
                SlidePhase::Hidden | SlidePhase::Exiting => {}
            },
            ToggleAction::Restart => {
                self.playhead = 0.0;
                self.set_phase(SlidePhase::Hidden);
                self.run_forward();
            }
            ToggleAction::Reset => {
                self.playhead = 0.0;
                self.set_phase(SlidePhase::Hidden);
            }
            ToggleAction::Complete => {
                self.playhead = end;
                self.set_phase(SlidePhase::Visible);
            }
            ToggleAction::None => {}
        }
    }

    fn run_forward(&mut self) {
        if self.phase == SlidePhase::Hidden {
            self.entries += 1;
        }
        if self.playhead >= self.timeline.duration() {
            self.playhead = self.timeline.duration();
            self.set_phase(SlidePhase::Visible);
        } else {
            self.set_phase(SlidePhase::Entering);
        }
    }

    fn set_phase(&mut self, phase: SlidePhase) {
        if self.phase != phase {
            tracing::debug!(
                id = %self.id,
                from = ?self.phase,
                to = ?phase,
                playhead = self.playhead,
                "slide phase"
            );
            self.phase = phase;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/controller.rs"]
mod tests;
