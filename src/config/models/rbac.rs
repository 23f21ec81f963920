//! RBAC configuration

use super::*;
use crate::auth::rbac::RoleGrantTable;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Warn when `can_access_resource` is asked about a permission that does
    /// not exist. Off by default; unknown roles are always logged.
    #[serde(default)]
    pub warn_on_unknown_permission: bool,
    /// Reject grant tables where a lower role grants more than a higher one
    #[serde(default = "default_true")]
    pub enforce_hierarchy: bool,
    /// Replacement for the compiled-in grant table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grants: Option<RoleGrantTable>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            warn_on_unknown_permission: false,
            enforce_hierarchy: default_true(),
            grants: None,
        }
    }
}

impl RbacConfig {
    /// Load overrides from environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary variable lookup
    pub fn from_env_with<F>(lookup: F) -> crate::utils::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = env_flag(&lookup, ENV_WARN_UNKNOWN_PERMISSION)? {
            config.warn_on_unknown_permission = value;
        }
        if let Some(value) = env_flag(&lookup, ENV_ENFORCE_HIERARCHY)? {
            config.enforce_hierarchy = value;
        }
        Ok(config)
    }

    /// Effective grant table
    pub fn grant_table(&self) -> RoleGrantTable {
        self.grants.clone().unwrap_or_default()
    }

    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.warn_on_unknown_permission {
            self.warn_on_unknown_permission = other.warn_on_unknown_permission;
        }
        if !other.enforce_hierarchy {
            self.enforce_hierarchy = other.enforce_hierarchy;
        }
        if other.grants.is_some() {
            self.grants = other.grants;
        }
        self
    }

    /// Validate RBAC configuration
    pub fn validate(&self) -> Result<(), String> {
        let table = self.grant_table();

        if self.enforce_hierarchy {
            table.validate_hierarchy().map_err(|e| e.to_string())?;
        }

        if table.is_empty() {
            return Err("Grant table grants no permissions to any role".to_string());
        }

        Ok(())
    }
}

/// Warn about configurations that weaken access control diagnostics
pub fn warn_lenient_config(config: &RbacConfig) {
    if !config.enforce_hierarchy && config.grants.is_some() {
        warn!(
            "Role hierarchy enforcement is disabled for a custom grant table. A lower role may hold permissions a higher role lacks."
        );
    }
}
