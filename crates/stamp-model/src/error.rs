//! Errors raised while decoding stories.

/// Result alias for story decoding.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when decoding a story.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown element type '{type_name}' at {path}")]
    UnknownElementType { type_name: String, path: String },

    #[error("Unknown layer template '{template}' at {path}")]
    UnknownTemplate { template: String, path: String },

    #[error("Missing required field '{field}' at {path}")]
    MissingField { field: &'static str, path: String },

    #[error("Invalid value at {path}: {message}")]
    InvalidField { path: String, message: String },

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid YAML: {0}")]
    Yaml(String),
}

impl ModelError {
    /// Whether this error is an element type or layer template with no
    /// matching renderer.
    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(
            self,
            ModelError::UnknownElementType { .. } | ModelError::UnknownTemplate { .. }
        )
    }
}
