use crate::foundation::{
    core::Rgba8,
    error::{OvermarkError, OvermarkResult},
};

/// One visual marker to draw over the base image.
///
/// Every coordinate field is expressed in the base image's natural pixel
/// space; the engine owns the transform to display space. The serialized form
/// is internally tagged (`"type"`) with camelCase fields, matching the
/// analysis-service wire format, e.g.
/// `{"type": "arrow", "startX": 10, "startY": 10, "endX": 80, "endY": 40}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Annotation {
    /// Axis-aligned rectangle, outline only.
    Box {
        /// Left edge.
        x1: f64,
        /// Top edge.
        y1: f64,
        /// Right edge.
        x2: f64,
        /// Bottom edge.
        y2: f64,
    },
    /// Directed segment with a triangular arrowhead at the end point.
    Arrow {
        /// Tail x.
        start_x: f64,
        /// Tail y.
        start_y: f64,
        /// Head x.
        end_x: f64,
        /// Head y.
        end_y: f64,
    },
    /// Filled, semi-transparent rectangle.
    Highlight {
        /// Left edge.
        x1: f64,
        /// Top edge.
        y1: f64,
        /// Right edge.
        x2: f64,
        /// Bottom edge.
        y2: f64,
    },
    /// Continuously rotating partial arc anchored at a single point.
    ///
    /// The radius is fixed by the renderer, not caller-supplied.
    RotatingIndicator {
        /// Anchor x.
        center_x: f64,
        /// Anchor y.
        center_y: f64,
    },
    /// Filled + outlined rectangle whose color and pulse depend on severity.
    SeverityZone {
        /// Left edge.
        x1: f64,
        /// Top edge.
        y1: f64,
        /// Right edge.
        x2: f64,
        /// Bottom edge.
        y2: f64,
        /// Severity level, tiered by [`SeverityTier::for_level`].
        severity: u32,
    },
    /// Rounded, filled text chip centered at a point.
    Label {
        /// Anchor x (chip center).
        x: f64,
        /// Anchor y (chip center).
        y: f64,
        /// Chip text; labels without text are silently skipped at draw time.
        #[serde(default)]
        text: Option<String>,
    },
}

/// Three-bucket severity classification driving hazard-zone styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SeverityTier {
    /// Below 5: amber, no pulse.
    Low,
    /// 5 through 7: red, no pulse.
    Medium,
    /// 8 and above: red, pulsing opacity and a larger glow.
    High,
}

impl SeverityTier {
    /// Classify a raw severity level.
    pub fn for_level(severity: u32) -> Self {
        match severity {
            0..=4 => Self::Low,
            5..=7 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Tier color at full alpha.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Low => Rgba8::new(255, 193, 7, 255),
            Self::Medium | Self::High => Rgba8::new(244, 67, 54, 255),
        }
    }

    /// Whether zones in this tier oscillate their opacity.
    pub fn pulses(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Parse an annotation list from its JSON wire form.
///
/// The list itself must be valid JSON; individual entries that fail to decode
/// (unknown type tag, missing coordinate fields) are logged and skipped so one
/// malformed annotation never drops the rest.
pub fn parse_annotations(json: &str) -> OvermarkResult<Vec<Annotation>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| OvermarkError::serde(format!("annotation list is not a JSON array: {e}")))?;

    let mut out = Vec::with_capacity(raw.len());
    for (i, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Annotation>(value) {
            Ok(a) => out.push(a),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed annotation");
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/model.rs"]
mod tests;
