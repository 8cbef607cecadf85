use crate::foundation::core::Rgba8;

/// Complete fill/text style for one scene op.
///
/// Every op carries its own paint; nothing is inherited from a previous op,
/// so drawing order can never leak stroke, fill, or transparency state
/// between primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Straight-alpha color.
    pub color: Rgba8,
    /// Extra opacity multiplier applied on top of the color's alpha.
    pub opacity: f32,
}

impl Paint {
    /// Paint with the given color at full opacity.
    pub fn solid(color: Rgba8) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Same paint with a replaced opacity multiplier.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    /// Effective alpha after applying the opacity multiplier.
    pub fn effective_alpha(self) -> u8 {
        let a = f32::from(self.color.a) * self.opacity.clamp(0.0, 1.0);
        a.round().clamp(0.0, 255.0) as u8
    }
}

/// Stroke geometry for one scene op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in display pixels.
    pub width: f64,
}

impl StrokeStyle {
    /// Stroke of the given width.
    pub const fn new(width: f64) -> Self {
        Self { width }
    }
}
