//! # Importer Error Types Module
//!
//! Error types for everything around the importer core. The conversion itself
//! never fails; these cover reading input, configuration, form submission
//! checks and JSON output.

/// Custom error types for importer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Raw text could not be read
    Input(String),
    /// Invalid configuration value
    Config(String),
    /// Recipe draft is not ready for submission
    Validation(String),
    /// JSON serialization errors
    Serialization(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Input(msg) => write!(f, "Input error: {msg}"),
            ImportError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ImportError::Validation(msg) => write!(f, "Validation error: {msg}"),
            ImportError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for ImportError {
    fn from(err: anyhow::Error) -> Self {
        ImportError::Input(err.to_string())
    }
}
