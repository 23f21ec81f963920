//! Helper functions for creating specific error types

use super::types::RbacError;

/// Helper functions for creating specific errors
impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    /// Whether this error denies access, as opposed to a setup failure
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::Authorization(_))
    }
}
