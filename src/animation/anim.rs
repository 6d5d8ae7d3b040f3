use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
    foundation::error::{ScrollshowError, ScrollshowResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Keyframe track over a normalized position axis (for example a scroll fraction).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by `at`
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: f64,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> ScrollshowResult<()> {
        if self.keys.is_empty() {
            return Err(ScrollshowError::validation(
                "Keyframes must have at least one key",
            ));
        }
        if self.keys.iter().any(|k| !k.at.is_finite()) {
            return Err(ScrollshowError::validation(
                "Keyframes positions must be finite",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollshowError::validation(
                "Keyframes keys must be sorted by position",
            ));
        }
        Ok(())
    }

    /// Samples the track. Positions before the first key hold the first value, positions after
    /// the last key hold the last value. An empty track yields `None`.
    pub fn sample(&self, pos: f64) -> Option<T> {
        let first = self.keys.first()?;
        let idx = self.keys.partition_point(|k| k.at <= pos);

        if idx == 0 {
            return Some(first.value.clone());
        }
        if idx >= self.keys.len() {
            return self.keys.last().map(|k| k.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return Some(a.value.clone());
        }

        let t = (pos - a.at) / span;
        Some(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }

    /// Index of the segment `[keys[i], keys[i + 1])` containing `pos`, clamped to the track.
    pub fn segment_at(&self, pos: f64) -> usize {
        let segments = self.keys.len().saturating_sub(1);
        if segments == 0 {
            return 0;
        }
        self.keys
            .partition_point(|k| k.at <= pos)
            .saturating_sub(1)
            .min(segments - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
