use crate::{animation::anim::Lerp, foundation::core::Vec2};

/// Animatable visual properties of one target element.
///
/// `translate` is in CSS pixels relative to the element's laid-out position; angles are degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementState {
    pub translate: Vec2,
    pub opacity: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub skew_y_deg: f64,
    pub rotation_x_deg: f64,
}

impl Default for ElementState {
    fn default() -> Self {
        Self::REST
    }
}

impl ElementState {
    /// Laid-out position, fully opaque, untransformed.
    pub const REST: Self = Self {
        translate: Vec2::ZERO,
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 0.0,
        skew_y_deg: 0.0,
        rotation_x_deg: 0.0,
    };

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.translate = Vec2::new(x, y);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotation(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }

    pub fn skew_y(mut self, deg: f64) -> Self {
        self.skew_y_deg = deg;
        self
    }

    pub fn rotation_x(mut self, deg: f64) -> Self {
        self.rotation_x_deg = deg;
        self
    }
}

impl Lerp for ElementState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            // overshooting eases may push past the end state; opacity stays a fraction
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            rotation_deg: <f64 as Lerp>::lerp(&a.rotation_deg, &b.rotation_deg, t),
            skew_y_deg: <f64 as Lerp>::lerp(&a.skew_y_deg, &b.skew_y_deg, t),
            rotation_x_deg: <f64 as Lerp>::lerp(&a.rotation_x_deg, &b.rotation_x_deg, t),
        }
    }
}
