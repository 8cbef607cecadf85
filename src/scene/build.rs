//! Scene builders for the six annotation primitives.
//!
//! Each builder is a pure function of already-scaled geometry, the shared
//! animation clock, and (for labels) a text shaper. Builders emit
//! [`SceneOp`] values that carry their complete style, so composing
//! primitives on one surface can never corrupt another primitive's state.

use std::f64::consts::{FRAC_PI_6, PI};

use kurbo::{Arc, BezPath, Point, Rect, RoundedRect, Shape, Vec2};

use crate::{
    annotation::model::{Annotation, SeverityTier},
    foundation::core::{Rgba8, ScaleMap},
    scene::style::{Paint, StrokeStyle},
    scene::text::{ShapedGlyphs, TextShaper},
};

/// One self-contained draw operation against the overlay surface.
///
/// Ops are executed strictly in order within a tick; styles never carry over
/// from one op to the next.
#[derive(Clone, Debug)]
pub enum SceneOp {
    /// Fill a path.
    FillPath {
        /// Path in display pixel space.
        path: BezPath,
        /// Fill style.
        paint: Paint,
    },
    /// Stroke a path.
    StrokePath {
        /// Path in display pixel space.
        path: BezPath,
        /// Stroke geometry.
        stroke: StrokeStyle,
        /// Stroke style.
        paint: Paint,
    },
    /// Draw shaped glyphs with their layout origin at `origin`.
    Glyphs {
        /// Shaped glyph runs plus backing font.
        glyphs: ShapedGlyphs,
        /// Top-left of the text layout box in display pixel space.
        origin: Point,
        /// Text color.
        paint: Paint,
    },
}

/// Arrowhead flank length in display pixels.
pub const ARROW_HEAD_LEN: f64 = 15.0;
/// Half-angle of the arrowhead opening.
pub const ARROW_HEAD_ANGLE: f64 = FRAC_PI_6;
/// Fixed radius of the rotating indicator circle in display pixels.
pub const INDICATOR_RADIUS: f64 = 30.0;
/// Angular extent of the rotating indicator arc (270 degrees).
pub const INDICATOR_SWEEP: f64 = 1.5 * PI;

const INDICATOR_HEAD_LEN: f64 = 8.0;

const BOX_COLOR: Rgba8 = Rgba8::new(0, 230, 118, 255);
const BOX_WIDTH: f64 = 3.0;
const ARROW_COLOR: Rgba8 = Rgba8::new(255, 82, 82, 255);
const ARROW_WIDTH: f64 = 3.0;
const HIGHLIGHT_COLOR: Rgba8 = Rgba8::new(255, 235, 59, 77);
const INDICATOR_COLOR: Rgba8 = Rgba8::new(0, 229, 255, 255);
const INDICATOR_WIDTH: f64 = 3.0;
const ZONE_FILL_ALPHA: u8 = 38;
const ZONE_WIDTH: f64 = 3.0;
const LABEL_BG: Rgba8 = Rgba8::new(17, 17, 17, 204);
const LABEL_TEXT: Rgba8 = Rgba8::new(245, 245, 245, 255);
const LABEL_SHADOW: Rgba8 = Rgba8::new(0, 0, 0, 90);
const LABEL_FONT_PX: f32 = 14.0;
const LABEL_PAD_X: f64 = 8.0;
const LABEL_PAD_Y: f64 = 4.0;
const LABEL_RADIUS: f64 = 4.0;

// Glow passes widen the primitive's own silhouette; the CPU pipeline has no
// shadow-blur primitive.
const GLOW_ALPHA: u8 = 56;
const GLOW_EXTRA_WIDTH: f64 = 6.0;
const GLOW_EXTRA_WIDTH_HOT: f64 = 12.0;

/// Oscillating opacity for pulsing severity zones.
pub fn pulse_opacity(clock: f64) -> f64 {
    (clock * 2.0).sin() * 0.3 + 0.7
}

fn rect_path(r: Rect) -> BezPath {
    r.to_path(0.1)
}

/// Closed arrowhead triangle with its tip at `tip`, pointing along
/// `dir_angle`, flanks at [`ARROW_HEAD_ANGLE`] off the reverse direction.
fn arrowhead_path(tip: Point, dir_angle: f64, len: f64) -> BezPath {
    let flank = |offset: f64| {
        let a = dir_angle + offset;
        Point::new(tip.x - len * a.cos(), tip.y - len * a.sin())
    };
    let mut p = BezPath::new();
    p.move_to(tip);
    p.line_to(flank(-ARROW_HEAD_ANGLE));
    p.line_to(flank(ARROW_HEAD_ANGLE));
    p.close_path();
    p
}

/// Outline-only bounding box with a glow pass underneath.
pub fn box_ops(x1: f64, y1: f64, x2: f64, y2: f64, scale: ScaleMap) -> Vec<SceneOp> {
    let path = rect_path(scale.rect(x1, y1, x2, y2));
    vec![
        SceneOp::StrokePath {
            path: path.clone(),
            stroke: StrokeStyle::new(BOX_WIDTH + GLOW_EXTRA_WIDTH),
            paint: Paint::solid(BOX_COLOR.with_alpha(GLOW_ALPHA)),
        },
        SceneOp::StrokePath {
            path,
            stroke: StrokeStyle::new(BOX_WIDTH),
            paint: Paint::solid(BOX_COLOR),
        },
    ]
}

/// Stroked shaft plus a filled triangular head at the end point.
pub fn arrow_ops(
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    scale: ScaleMap,
) -> Vec<SceneOp> {
    let start = scale.point(start_x, start_y);
    let end = scale.point(end_x, end_y);
    let dir = (end.y - start.y).atan2(end.x - start.x);

    let mut shaft = BezPath::new();
    shaft.move_to(start);
    shaft.line_to(end);

    vec![
        SceneOp::StrokePath {
            path: shaft,
            stroke: StrokeStyle::new(ARROW_WIDTH),
            paint: Paint::solid(ARROW_COLOR),
        },
        SceneOp::FillPath {
            path: arrowhead_path(end, dir, ARROW_HEAD_LEN),
            paint: Paint::solid(ARROW_COLOR),
        },
    ]
}

/// Filled, semi-transparent region with a soft glow; no stroke.
pub fn highlight_ops(x1: f64, y1: f64, x2: f64, y2: f64, scale: ScaleMap) -> Vec<SceneOp> {
    let r = scale.rect(x1, y1, x2, y2);
    vec![
        SceneOp::FillPath {
            path: rect_path(r.inflate(GLOW_EXTRA_WIDTH / 2.0, GLOW_EXTRA_WIDTH / 2.0)),
            paint: Paint::solid(HIGHLIGHT_COLOR.with_alpha(GLOW_ALPHA / 2)),
        },
        SceneOp::FillPath {
            path: rect_path(r),
            paint: Paint::solid(HIGHLIGHT_COLOR),
        },
    ]
}

/// 270-degree arc starting at `clock`, with a tangent-oriented arrowhead at
/// its leading edge.
pub fn rotating_indicator_ops(
    center_x: f64,
    center_y: f64,
    scale: ScaleMap,
    clock: f64,
) -> Vec<SceneOp> {
    let center = scale.point(center_x, center_y);
    let arc = Arc::new(
        center,
        Vec2::new(INDICATOR_RADIUS, INDICATOR_RADIUS),
        clock,
        INDICATOR_SWEEP,
        0.0,
    );
    let arc_path = arc.to_path(0.1);

    // Leading edge of the sweep; the head points along the arc's tangent
    // (perpendicular to the radius at that point).
    let lead = clock + INDICATOR_SWEEP;
    let tip = Point::new(
        center.x + INDICATOR_RADIUS * lead.cos(),
        center.y + INDICATOR_RADIUS * lead.sin(),
    );
    let tangent = lead + std::f64::consts::FRAC_PI_2;

    vec![
        SceneOp::StrokePath {
            path: arc_path,
            stroke: StrokeStyle::new(INDICATOR_WIDTH),
            paint: Paint::solid(INDICATOR_COLOR),
        },
        SceneOp::FillPath {
            path: arrowhead_path(tip, tangent, INDICATOR_HEAD_LEN),
            paint: Paint::solid(INDICATOR_COLOR),
        },
    ]
}

/// Filled + outlined hazard zone, tiered by severity.
///
/// Low tier renders amber, medium red, high red with an oscillating opacity
/// pulse and a larger glow. Opacity and glow are per-op state here, so
/// nothing needs resetting for the next primitive.
pub fn severity_zone_ops(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    severity: u32,
    scale: ScaleMap,
    clock: f64,
) -> Vec<SceneOp> {
    let tier = SeverityTier::for_level(severity);
    let color = tier.color();
    let opacity = if tier.pulses() {
        pulse_opacity(clock) as f32
    } else {
        1.0
    };
    let glow_width = if tier.pulses() {
        ZONE_WIDTH + GLOW_EXTRA_WIDTH_HOT
    } else {
        ZONE_WIDTH + GLOW_EXTRA_WIDTH
    };
    let path = rect_path(scale.rect(x1, y1, x2, y2));

    vec![
        SceneOp::StrokePath {
            path: path.clone(),
            stroke: StrokeStyle::new(glow_width),
            paint: Paint::solid(color.with_alpha(GLOW_ALPHA)).with_opacity(opacity),
        },
        SceneOp::FillPath {
            path: path.clone(),
            paint: Paint::solid(color.with_alpha(ZONE_FILL_ALPHA)).with_opacity(opacity),
        },
        SceneOp::StrokePath {
            path,
            stroke: StrokeStyle::new(ZONE_WIDTH),
            paint: Paint::solid(color).with_opacity(opacity),
        },
    ]
}

/// Rounded text chip centered at the anchor point.
///
/// The chip is sized from the measured text plus fixed padding; the text is
/// drawn centered and middle-aligned inside it.
pub fn label_ops(
    x: f64,
    y: f64,
    text: &str,
    scale: ScaleMap,
    shaper: &mut dyn TextShaper,
) -> crate::OvermarkResult<Vec<SceneOp>> {
    let anchor = scale.point(x, y);
    let shaped = shaper.shape(text, LABEL_FONT_PX)?;

    let chip_w = shaped.width + 2.0 * LABEL_PAD_X;
    let chip_h = shaped.height + 2.0 * LABEL_PAD_Y;
    let chip = Rect::new(
        anchor.x - chip_w / 2.0,
        anchor.y - chip_h / 2.0,
        anchor.x + chip_w / 2.0,
        anchor.y + chip_h / 2.0,
    );
    let rounded = |r: Rect| RoundedRect::from_rect(r, LABEL_RADIUS).to_path(0.1);

    let mut ops = vec![
        SceneOp::FillPath {
            path: rounded(chip.inflate(1.0, 1.0) + Vec2::new(0.0, 2.0)),
            paint: Paint::solid(LABEL_SHADOW),
        },
        SceneOp::FillPath {
            path: rounded(chip),
            paint: Paint::solid(LABEL_BG),
        },
    ];
    if let Some(glyphs) = shaped.glyphs {
        ops.push(SceneOp::Glyphs {
            glyphs,
            origin: Point::new(chip.x0 + LABEL_PAD_X, chip.y0 + LABEL_PAD_Y),
            paint: Paint::solid(LABEL_TEXT),
        });
    }
    Ok(ops)
}

/// Build the full scene for one tick.
///
/// Annotations are matched exhaustively; adding a variant is a compile error
/// until it gets a builder. Each annotation is guarded individually, so one
/// malformed entry is skipped with a warning and the rest still draw.
#[tracing::instrument(level = "trace", skip_all, fields(annotations = annotations.len()))]
pub fn build_scene(
    annotations: &[Annotation],
    scale: ScaleMap,
    clock: f64,
    shaper: &mut dyn TextShaper,
) -> Vec<SceneOp> {
    let mut ops = Vec::new();
    for a in annotations {
        match a {
            Annotation::Box { x1, y1, x2, y2 } => {
                ops.extend(box_ops(*x1, *y1, *x2, *y2, scale));
            }
            Annotation::Arrow {
                start_x,
                start_y,
                end_x,
                end_y,
            } => {
                ops.extend(arrow_ops(*start_x, *start_y, *end_x, *end_y, scale));
            }
            Annotation::Highlight { x1, y1, x2, y2 } => {
                ops.extend(highlight_ops(*x1, *y1, *x2, *y2, scale));
            }
            Annotation::RotatingIndicator { center_x, center_y } => {
                ops.extend(rotating_indicator_ops(*center_x, *center_y, scale, clock));
            }
            Annotation::SeverityZone {
                x1,
                y1,
                x2,
                y2,
                severity,
            } => {
                ops.extend(severity_zone_ops(*x1, *y1, *x2, *y2, *severity, scale, clock));
            }
            Annotation::Label { x, y, text } => {
                let Some(text) = text.as_deref().filter(|t| !t.is_empty()) else {
                    continue;
                };
                match label_ops(*x, *y, text, scale, shaper) {
                    Ok(label) => ops.extend(label),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping label annotation");
                    }
                }
            }
        }
    }
    ops
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
