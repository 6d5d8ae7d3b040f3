use crate::foundation::error::{ScrollshowError, ScrollshowResult};

pub use kurbo::Vec2;

/// Frame clock rate used to turn frame ticks into seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ScrollshowResult<Self> {
        if den == 0 {
            return Err(ScrollshowError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ScrollshowError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Visible window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollshowResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ScrollshowError::validation(
                "viewport width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Straight (non-premultiplied) RGBA8, the way stylesheets spell colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Normalizes a scroll offset into `[0, 1]` over the scrollable extent.
///
/// A page that does not scroll (`max_scroll <= 0`) is always at fraction 0.
pub fn scroll_fraction(scroll_y: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
