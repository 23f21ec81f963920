//! Error types for the RBAC crate

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the crate
///
/// Authorization queries never produce one of these; they degrade to a
/// denial instead. Errors come from configuration loading, string parsing
/// and the opt-in enforcement helpers.
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),
}
