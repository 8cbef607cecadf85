//! Overmark is an annotation overlay rendering engine.
//!
//! It draws dynamic, animated diagnostic annotations (bounding boxes,
//! directional arrows, highlighted regions, rotating action indicators,
//! severity-coded hazard zones, text labels) over a static base image. All
//! annotation geometry is expressed in the base image's natural pixel space
//! and re-projected every tick onto whatever size the image is displayed at.
//!
//! # Pipeline overview
//!
//! 1. **Synchronize**: observe the base image until its natural size is known
//!    ([`ImageSync`], [`ImageSource`])
//! 2. **Scale**: derive the per-axis natural→display map ([`Dimensions`],
//!    [`ScaleMap`])
//! 3. **Build**: turn annotations + clock into self-contained draw ops
//!    ([`build_scene`], [`SceneOp`])
//! 4. **Render**: rasterize the ops to premultiplied RGBA8
//!    ([`OverlaySurface`])
//!
//! The loop itself belongs to the host: [`OverlayEngine`] requests frame
//! callbacks through a [`FrameScheduler`] and the host calls
//! [`OverlayEngine::on_frame`] when each one fires, until
//! [`OverlayEngine::unmount`] stops the cycle.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic geometry**: `display = natural * (display_dim /
//!   natural_dim)`, exactly; upstream annotation producers rely on it.
//! - **Per-op styling**: every draw op carries its full style, so primitives
//!   cannot leak stroke/fill/opacity state into each other.
//! - **Skip, don't abort**: one malformed annotation is logged and skipped;
//!   the rest of the tick still draws.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod annotation;
mod engine;
mod foundation;
mod render;
mod scene;
mod sync;

pub use annotation::model::{Annotation, SeverityTier, parse_annotations};
pub use engine::looper::{FrameScheduler, FrameToken, LoopController, LoopState};
pub use engine::overlay::OverlayEngine;
pub use foundation::core::{CLOCK_STEP, Dimensions, OverlayClock, Rgba8, ScaleMap};
pub use foundation::error::{OvermarkError, OvermarkResult};
pub use render::composite::{composite_over, premul_over_in_place};
pub use render::surface::{OverlayFrame, OverlaySurface};
pub use scene::build::{
    ARROW_HEAD_ANGLE, ARROW_HEAD_LEN, INDICATOR_RADIUS, INDICATOR_SWEEP, SceneOp, build_scene,
    pulse_opacity,
};
pub use scene::style::{Paint, StrokeStyle};
pub use scene::text::{ChipBrush, ParleyShaper, ShapedGlyphs, ShapedText, TextShaper};
pub use sync::image::{DecodedImage, ImageSource, ImageSync, LoadState};
