use stamp_model::ModelError;

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while producing a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to render document template: {0}")]
    Template(String),

    #[error("Failed to minify CSS: {0}")]
    Css(String),
}

impl RenderError {
    /// Whether the story named an element type or layer template that has no renderer.
    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(self, RenderError::Model(e) if e.is_unknown_discriminator())
    }
}
