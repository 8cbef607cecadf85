/// Convenience result type used across Overmark.
pub type OvermarkResult<T> = Result<T, OvermarkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum OvermarkError {
    /// Invalid caller-provided data (dimensions, annotation fields, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or measuring the base image.
    #[error("image error: {0}")]
    Image(String),

    /// Errors while rasterizing a scene to the overlay surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing annotation data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OvermarkError {
    /// Build a [`OvermarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OvermarkError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`OvermarkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`OvermarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
