/// Where the trigger lines sit, as fractions of viewport height from its top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Slide top meets this line: the region starts.
    pub start_viewport_ratio: f64,
    /// Slide bottom meets this line: the region ends.
    pub end_viewport_ratio: f64,
    pub actions: ToggleActions,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            start_viewport_ratio: 0.6,
            end_viewport_ratio: 0.5,
            actions: ToggleActions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// Run forward from the current playhead.
    Play,
    /// Run backward from the current playhead.
    Reverse,
    /// Jump to the start and run forward.
    Restart,
    /// Jump to the start and stop.
    Reset,
    /// Jump to the end and stop.
    Complete,
    None,
}

/// Action per crossing, in enter / leave / enter-back / leave-back order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    /// Play on forward entry, reverse on backward exit, ignore the rest.
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::Reverse,
        }
    }
}

impl ToggleActions {
    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Scrolling down past the start line.
    Enter,
    /// Scrolling down past the end line.
    Leave,
    /// Scrolling up past the end line.
    EnterBack,
    /// Scrolling up past the start line.
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Before,
    Active,
    After,
}

/// Scroll offsets (page pixels) at which a slide's trigger lines are crossed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerRegion {
    pub start: f64,
    pub end: f64,
}

impl TriggerRegion {
    pub fn for_slide(top: f64, height: f64, viewport_height: f64, cfg: &TriggerConfig) -> Self {
        Self {
            start: top - cfg.start_viewport_ratio * viewport_height,
            end: top + height - cfg.end_viewport_ratio * viewport_height,
        }
    }

    pub fn zone(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y > self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Crossings between two zones, in the order they happen. Jumping over the whole region
    /// yields both crossings.
    pub fn crossings(from: Zone, to: Zone) -> &'static [TriggerEvent] {
        use TriggerEvent::*;
        match (from, to) {
            (Zone::Before, Zone::Active) => &[Enter],
            (Zone::Before, Zone::After) => &[Enter, Leave],
            (Zone::Active, Zone::After) => &[Leave],
            (Zone::After, Zone::Active) => &[EnterBack],
            (Zone::After, Zone::Before) => &[EnterBack, LeaveBack],
            (Zone::Active, Zone::Before) => &[LeaveBack],
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/trigger.rs"]
mod tests;
