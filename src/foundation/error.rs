/// Convenience result type used across the crate.
pub type DrawShapeResult<T> = Result<T, DrawShapeError>;

/// Top-level error taxonomy used by rendering and node APIs.
#[derive(thiserror::Error, Debug)]
pub enum DrawShapeError {
    /// A color name outside the fixed named-color table (or empty).
    #[error("invalid color name: {0:?}")]
    InvalidColorName(String),

    /// The requested shape identifier has no registered implementation.
    #[error("unknown shape: {0:?}")]
    UnknownShape(String),

    /// Invalid user-provided request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or assembling tensors.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing requests and schemas.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawShapeError {
    /// Build a [`DrawShapeError::InvalidColorName`] value.
    pub fn invalid_color(name: impl Into<String>) -> Self {
        Self::InvalidColorName(name.into())
    }

    /// Build a [`DrawShapeError::UnknownShape`] value.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape(name.into())
    }

    /// Build a [`DrawShapeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrawShapeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DrawShapeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DrawShapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
