use crate::{
    foundation::error::{OvermarkError, OvermarkResult},
    render::surface::OverlayFrame,
};

/// Source-over one premultiplied RGBA8 buffer onto another, in place.
///
/// Buffers must be equal-length and 4-byte aligned.
pub fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> OvermarkResult<()> {
    if dst.len() != src.len() || dst.len() % 4 != 0 {
        return Err(OvermarkError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        for c in 0..4 {
            let dc = ((u16::from(d[c]) * inv + 127) / 255) as u8;
            d[c] = s[c].saturating_add(dc);
        }
    }
    Ok(())
}

/// Blend an overlay frame over a base frame of the same size.
///
/// For hosts that present a single buffer instead of layering the overlay
/// surface above the image element. Both frames must be premultiplied.
pub fn composite_over(base: &mut OverlayFrame, overlay: &OverlayFrame) -> OvermarkResult<()> {
    if base.width != overlay.width || base.height != overlay.height {
        return Err(OvermarkError::render(format!(
            "composite size mismatch: base {}x{}, overlay {}x{}",
            base.width, base.height, overlay.width, overlay.height
        )));
    }
    if !base.premultiplied || !overlay.premultiplied {
        return Err(OvermarkError::render(
            "composite_over expects premultiplied frames",
        ));
    }
    premul_over_in_place(&mut base.data, &overlay.data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
