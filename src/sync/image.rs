use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{
    core::Dimensions,
    error::OvermarkResult,
};

/// Anything that can eventually report the base image's natural pixel size.
///
/// Loading is a one-shot asynchronous boundary: `natural_size` returns `None`
/// until the image has finished loading, then a stable `Some` from that point
/// on. It may already be `Some` at first observation (the load may complete
/// before an observer attaches) and must never be assumed to flip
/// synchronously.
pub trait ImageSource {
    /// Natural (intrinsic) pixel size, once known.
    fn natural_size(&self) -> Option<(u32, u32)>;
}

/// A fully decoded base image: premultiplied RGBA8 plus natural size.
#[derive(Clone)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Decode encoded image bytes and convert to premultiplied RGBA8.
    pub fn decode(bytes: &[u8]) -> OvermarkResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgba8_premul = rgba.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);

        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn rgba8_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl ImageSource for DecodedImage {
    fn natural_size(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }
}

/// Load progress of the observed base image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Image not yet loaded; no dimensions known.
    Pending,
    /// Natural and displayed dimensions known.
    Ready(Dimensions),
}

/// Two-state synchronizer between image loading and the render loop.
///
/// Transitions `Pending -> Ready` when the observed source reports its
/// natural size, immediately if the source was already loaded at observation
/// time. Each transition publishes the four dimension fields by returning
/// them. It does not re-observe for later resizes on its own; republication
/// on layout change is the engine's job.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageSync {
    state: Option<Dimensions>,
}

impl ImageSync {
    /// A synchronizer in the `Pending` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        match self.state {
            Some(d) => LoadState::Ready(d),
            None => LoadState::Pending,
        }
    }

    /// True once dimensions have been published.
    pub fn is_ready(&self) -> bool {
        self.state.is_some()
    }

    /// Return to `Pending` (a new base image is about to be observed).
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Observe the source; on the `Pending -> Ready` transition, publish
    /// dimensions.
    ///
    /// Returns `Ok(None)` while still pending and after the state is already
    /// `Ready` (the transition fires at most once per observed image).
    pub fn observe(
        &mut self,
        source: &dyn ImageSource,
        display: (u32, u32),
    ) -> OvermarkResult<Option<Dimensions>> {
        if self.state.is_some() {
            return Ok(None);
        }
        let Some(natural) = source.natural_size() else {
            return Ok(None);
        };
        let dims = Dimensions::new(natural, display)?;
        self.state = Some(dims);
        tracing::debug!(
            natural_width = dims.natural_width,
            natural_height = dims.natural_height,
            display_width = dims.display_width,
            display_height = dims.display_height,
            "base image ready"
        );
        Ok(Some(dims))
    }

    /// Overwrite the published dimensions after a layout-affecting resize.
    ///
    /// Only meaningful once `Ready`; a pending synchronizer is left alone so
    /// the one-shot load transition stays intact.
    pub fn republish(&mut self, dims: Dimensions) {
        if self.state.is_some() {
            self.state = Some(dims);
        }
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sync/image.rs"]
mod tests;
