use crate::{
    annotation::model::Annotation,
    engine::looper::{FrameScheduler, FrameToken, LoopController},
    foundation::core::{Dimensions, OverlayClock},
    foundation::error::OvermarkResult,
    render::surface::{OverlayFrame, OverlaySurface},
    scene::build::build_scene,
    scene::text::TextShaper,
    sync::image::{ImageSource, ImageSync, LoadState},
};

/// Composition root: wires the synchronizer, scaler, scene builders, surface
/// and loop controller together.
///
/// One instance corresponds to one mounted overlay. The caller supplies a
/// base image source and an annotation list; both are treated as immutable
/// inputs between `set_*` calls, which swap whole values rather than patching
/// state. The running loop re-reads annotations and scale factors every tick,
/// so swaps take effect on the next tick without a stop/restart.
pub struct OverlayEngine {
    annotations: Vec<Annotation>,
    image: Option<Box<dyn ImageSource>>,
    sync: ImageSync,
    display: (u32, u32),
    dims: Option<Dimensions>,
    clock: OverlayClock,
    surface: Option<OverlaySurface>,
    shaper: Box<dyn TextShaper>,
    looper: LoopController,
}

impl OverlayEngine {
    /// Build an engine with no image and no annotations.
    pub fn new(shaper: Box<dyn TextShaper>) -> Self {
        Self {
            annotations: Vec::new(),
            image: None,
            sync: ImageSync::new(),
            display: (0, 0),
            dims: None,
            clock: OverlayClock::new(),
            surface: None,
            shaper,
            looper: LoopController::new(),
        }
    }

    /// Replace the base image.
    ///
    /// Restart semantics: the synchronizer returns to `Pending`, dimensions
    /// are discarded and the clock rewinds. A running loop keeps ticking but
    /// draws nothing until the new image reaches `Ready`.
    pub fn set_image(&mut self, source: Box<dyn ImageSource>) {
        self.image = Some(source);
        self.sync.reset();
        self.dims = None;
        self.clock = OverlayClock::new();
    }

    /// Replace the annotation list; picked up on the next tick.
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }

    /// Current annotation list.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Record a layout-affecting resize of the displayed image.
    ///
    /// Dimensions and both scale factors are recomputed from scratch,
    /// republished through the synchronizer, and the surface is reallocated
    /// at the new size; the next tick picks them up.
    pub fn set_display_size(&mut self, width: u32, height: u32) -> OvermarkResult<()> {
        self.display = (width, height);
        if let Some(d) = self.dims {
            let dims = Dimensions::new((d.natural_width, d.natural_height), (width, height))?;
            self.dims = Some(dims);
            self.sync.republish(dims);
        }
        self.surface = None;
        self.ensure_surface()
    }

    /// Mount the overlay: observe the image and start the loop if it is
    /// already loaded.
    pub fn mount(&mut self, sched: &mut dyn FrameScheduler) -> OvermarkResult<bool> {
        self.poll_image(sched)
    }

    /// Re-observe the image source after its loading may have progressed.
    ///
    /// On the `Pending -> Ready` transition this configures the scaler input,
    /// allocates the surface and starts the loop. Returns true exactly when
    /// that transition fired. If the image never loads, the state simply
    /// stays `Pending` and the loop never starts; no error is surfaced.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn poll_image(&mut self, sched: &mut dyn FrameScheduler) -> OvermarkResult<bool> {
        let Some(image) = self.image.as_deref() else {
            return Ok(false);
        };
        let Some(dims) = self.sync.observe(image, self.display)? else {
            return Ok(false);
        };
        self.dims = Some(dims);
        self.ensure_surface()?;
        self.looper.start(sched);
        Ok(true)
    }

    /// Execute one tick when the host's frame callback fires.
    ///
    /// Clear surface, advance the clock, draw every annotation, reschedule.
    /// Returns false for stale tokens or while stopped (the callback is
    /// ignored, nothing is drawn).
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn on_frame(
        &mut self,
        token: FrameToken,
        sched: &mut dyn FrameScheduler,
    ) -> OvermarkResult<bool> {
        if !self.looper.acknowledge_frame(token) {
            return Ok(false);
        }
        // Reschedule first so a render failure cannot kill the loop.
        self.looper.reschedule(sched);

        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        if let Some(dims) = self.dims {
            let clock = self.clock.advance();
            let ops = build_scene(
                &self.annotations,
                dims.scale_map(),
                clock,
                self.shaper.as_mut(),
            );
            if let Some(surface) = self.surface.as_mut() {
                surface.render(&ops)?;
            }
        }
        Ok(true)
    }

    /// Tear down: stop the loop unconditionally.
    ///
    /// Skipping this leaks a perpetually rescheduling callback drawing to a
    /// detached surface; calling it more than once is safe.
    pub fn unmount(&mut self, sched: &mut dyn FrameScheduler) {
        self.looper.stop(sched);
    }

    /// Load state of the observed base image.
    pub fn load_state(&self) -> LoadState {
        self.sync.state()
    }

    /// Current dimensions, once published.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    /// Current animation clock value.
    pub fn clock(&self) -> f64 {
        self.clock.value()
    }

    /// True while the draw loop is scheduled.
    pub fn is_running(&self) -> bool {
        self.looper.is_running()
    }

    /// Borrow the overlay surface, once allocated.
    pub fn surface(&self) -> Option<&OverlaySurface> {
        self.surface.as_ref()
    }

    /// Copy out the most recently rendered frame.
    pub fn frame(&self) -> Option<OverlayFrame> {
        self.surface.as_ref().map(OverlaySurface::frame)
    }

    fn ensure_surface(&mut self) -> OvermarkResult<()> {
        let (w, h) = self.display;
        if self.dims.is_none() || w == 0 || h == 0 {
            return Ok(());
        }
        let fits = self
            .surface
            .as_ref()
            .is_some_and(|s| s.width() == w && s.height() == h);
        if !fits {
            self.surface = Some(OverlaySurface::new(w, h)?);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/overlay.rs"]
mod tests;
