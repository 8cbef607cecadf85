use crate::foundation::error::{OvermarkError, OvermarkResult};

use kurbo::{Point, Rect};

/// Natural and displayed pixel sizes of the base image.
///
/// `natural_*` is the image's own pixel grid; `display_*` is the size of the
/// on-screen surface the overlay is drawn at. Both are captured together on
/// every image-load and layout-affecting resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width of the base image's own pixel grid.
    pub natural_width: u32,
    /// Height of the base image's own pixel grid.
    pub natural_height: u32,
    /// Width the image is currently displayed at.
    pub display_width: u32,
    /// Height the image is currently displayed at.
    pub display_height: u32,
}

impl Dimensions {
    /// Build dimensions from a natural size and a display size.
    pub fn new(natural: (u32, u32), display: (u32, u32)) -> OvermarkResult<Self> {
        if natural.0 == 0 || natural.1 == 0 {
            return Err(OvermarkError::validation(
                "natural dimensions must be non-zero",
            ));
        }
        Ok(Self {
            natural_width: natural.0,
            natural_height: natural.1,
            display_width: display.0,
            display_height: display.1,
        })
    }

    /// Recompute both scale factors from scratch.
    ///
    /// Scalars are derived, never incrementally updated; callers must obtain a
    /// fresh map whenever dimensions change.
    pub fn scale_map(self) -> ScaleMap {
        ScaleMap {
            sx: f64::from(self.display_width) / f64::from(self.natural_width),
            sy: f64::from(self.display_height) / f64::from(self.natural_height),
        }
    }
}

/// Per-axis linear map from natural pixel space to display pixel space.
///
/// This is not a uniform zoom: x and y scale independently. No rounding is
/// performed; sub-pixel coordinates pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMap {
    /// Horizontal scale, `display_width / natural_width`.
    pub sx: f64,
    /// Vertical scale, `display_height / natural_height`.
    pub sy: f64,
}

impl ScaleMap {
    /// The identity map (natural space == display space).
    pub const IDENTITY: Self = Self { sx: 1.0, sy: 1.0 };

    /// Map a point from natural to display space.
    pub fn point(self, x: f64, y: f64) -> Point {
        Point::new(x * self.sx, y * self.sy)
    }

    /// Map a rectangle corner-wise from natural to display space.
    ///
    /// Corners are mapped independently; a rectangle with `x2 < x1` keeps its
    /// negative width rather than being rejected or normalized.
    pub fn rect(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
        Rect::new(x1 * self.sx, y1 * self.sy, x2 * self.sx, y2 * self.sy)
    }
}

/// Fixed clock increment applied once per draw tick.
pub const CLOCK_STEP: f64 = 0.05;

/// Monotonically increasing animation clock shared by all animated
/// primitives of one engine instance.
///
/// Advanced by [`CLOCK_STEP`] per tick (not wall-clock time), so every effect
/// stays phase-consistent with the others.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayClock {
    t: f64,
}

impl OverlayClock {
    /// A clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    pub fn value(self) -> f64 {
        self.t
    }

    /// Advance by one tick and return the new value.
    pub fn advance(&mut self) -> f64 {
        self.t += CLOCK_STEP;
        self.t
    }
}

/// Straight-alpha RGBA8 color used by scene styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
