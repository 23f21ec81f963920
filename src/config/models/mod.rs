//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

#![allow(missing_docs)]

pub mod logging;
pub mod rbac;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;

use crate::utils::error::RbacError;

pub const ENV_WARN_UNKNOWN_PERMISSION: &str = "CASEFILE_RBAC_WARN_UNKNOWN_PERMISSION";
pub const ENV_ENFORCE_HIERARCHY: &str = "CASEFILE_RBAC_ENFORCE_HIERARCHY";
pub const ENV_LOG_LEVEL: &str = "CASEFILE_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "CASEFILE_LOG_JSON";

/// Default values for configuration
pub fn default_true() -> bool {
    true
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Read a boolean flag variable
pub(crate) fn env_flag<F>(lookup: &F, key: &str) -> crate::utils::error::Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(RbacError::config(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
