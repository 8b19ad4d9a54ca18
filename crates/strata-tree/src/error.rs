//! Error types for strata-tree

/// Result type for strata-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in strata-tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Failed to render {format} content: {message}")]
    RenderError { format: String, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not find object '{segment}' at path '{path}'")]
    ObjectNotFound { path: String, segment: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Unable to override '{key}': {reason}")]
    InvalidOverride { key: String, reason: String },
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn render(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RenderError {
            format: format.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_override(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOverride {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
