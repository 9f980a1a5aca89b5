/// Convenience result type used across the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised at input boundaries (config parsing, scene planning).
///
/// Geometry and collision functions never fail; they report soft conditions through
/// [`crate::Diagnostic`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
