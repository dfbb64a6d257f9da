//! Error types for the renderer

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a page description.
///
/// Every variant aborts the whole render; there is no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A renderable element has no (or an empty) `prefix`
    #[error("Prefix is required for element type: {element_type}")]
    MissingPrefix { element_type: String },

    /// A type-specific required field is absent
    #[error("Missing required field '{field}' for {element_type} '{prefix}'")]
    MissingField {
        element_type: String,
        prefix: String,
        field: String,
    },

    /// The description could not be deserialized at all
    #[error("Invalid page description: {0}")]
    InvalidDescription(String),
}

impl Error {
    pub(crate) fn missing_field(element_type: &str, prefix: &str, field: &str) -> Self {
        Error::MissingField {
            element_type: element_type.to_string(),
            prefix: prefix.to_string(),
            field: field.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidDescription(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::InvalidDescription(err.to_string())
    }
}
