use crate::foundation::core::Vec2;

/// Last pointer position in viewport coordinates. Starts at the origin until the pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct CursorTracker {
    position: Vec2,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}
