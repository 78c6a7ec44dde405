//! Error types for the Cookbook core library.

use thiserror::Error;

use crate::field::Field;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Cookbook.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A form path that does not name any draft field.
    #[error("Invalid field path: {0}")]
    FieldPath(String),

    /// A field that cannot be edited as text.
    #[error("Field {0} is not a text field")]
    NotEditable(Field),

    /// A list index past the end of the ingredient or step list.
    #[error("Index out of range for {field}: {index} (length {len})")]
    IndexOutOfRange {
        field: Field,
        index: usize,
        len: usize,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new field path error.
    pub fn field_path(path: impl Into<String>) -> Self {
        Self::FieldPath(path.into())
    }
}
