use std::sync::Arc;

use crate::foundation::error::{OvermarkError, OvermarkResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChipBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Shaped glyphs plus the backing font, ready for rasterization.
#[derive(Clone)]
pub struct ShapedGlyphs {
    /// Fully built text layout.
    pub layout: Arc<parley::Layout<ChipBrush>>,
    /// Font data backing the layout's glyph ids.
    pub font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ShapedGlyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedGlyphs")
            .field("layout_ptr", &Arc::as_ptr(&self.layout))
            .finish()
    }
}

/// Result of measuring (and optionally shaping) a run of label text.
#[derive(Clone, Debug)]
pub struct ShapedText {
    /// Advance width of the rendered text in display pixels.
    pub width: f64,
    /// Line height of the rendered text in display pixels.
    pub height: f64,
    /// Shaped glyphs when the shaper can produce them; `None` means the chip
    /// is drawn without glyph content (measurement-only shapers).
    pub glyphs: Option<ShapedGlyphs>,
}

/// Measures and shapes label text in a fixed UI font.
///
/// The label renderer sizes its chip from the measured width, so this is the
/// one seam where text handling enters the scene builder.
pub trait TextShaper {
    /// Measure and shape `text` at `size_px`.
    fn shape(&mut self, text: &str, size_px: f32) -> OvermarkResult<ShapedText>;
}

/// [`TextShaper`] backed by Parley, shaping with caller-provided font bytes.
pub struct ParleyShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<ChipBrush>,
    font: vello_cpu::peniko::FontData,
    family_name: String,
}

impl core::fmt::Debug for ParleyShaper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyShaper")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyShaper {
    /// Register raw font bytes and build a shaper around them.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> OvermarkResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            OvermarkError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| OvermarkError::validation("registered font family has no name"))?
            .to_string();

        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font,
            family_name,
        })
    }

    /// Resolved family name of the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextShaper for ParleyShaper {
    fn shape(&mut self, text: &str, size_px: f32) -> OvermarkResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(OvermarkError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(ChipBrush::default()));

        let mut layout: parley::Layout<ChipBrush> = builder.build(text);
        layout.break_all_lines(None);

        Ok(ShapedText {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            glyphs: Some(ShapedGlyphs {
                layout: Arc::new(layout),
                font: self.font.clone(),
            }),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
