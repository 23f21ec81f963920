//! Permission registry construction

use crate::config::RbacConfig;
use crate::utils::error::{RbacError, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info};

use super::table::RoleGrantTable;

static GLOBAL_REGISTRY: Lazy<PermissionRegistry> = Lazy::new(|| {
    info!("Initializing global permission registry");
    PermissionRegistry::default()
});

/// Read-only registry answering authorization queries
///
/// Cloning is cheap; clones share the same grant table.
#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    /// Role grants, fixed at construction
    pub(super) table: Arc<RoleGrantTable>,
    /// Log a warning when a composed permission does not exist
    pub(super) warn_on_unknown_permission: bool,
}

impl Default for PermissionRegistry {
    fn default() -> Self {
        Self::new(RoleGrantTable::default())
    }
}

impl PermissionRegistry {
    /// Create a registry over the given table
    pub fn new(table: RoleGrantTable) -> Self {
        debug!("Permission registry holds {} grants", table.len());
        Self {
            table: Arc::new(table),
            warn_on_unknown_permission: false,
        }
    }

    /// Create a registry from validated configuration
    pub fn from_config(config: &RbacConfig) -> Result<Self> {
        info!("Initializing permission registry");

        config
            .validate()
            .map_err(|e| RbacError::config(format!("RBAC config error: {}", e)))?;

        let registry = Self::new(config.grant_table())
            .with_unknown_permission_warnings(config.warn_on_unknown_permission);

        info!("Permission registry initialized successfully");
        Ok(registry)
    }

    /// Process-wide registry over the compiled-in table
    pub fn global() -> &'static PermissionRegistry {
        &GLOBAL_REGISTRY
    }

    /// Toggle the warning emitted by `can_access_resource` for unknown permissions
    pub fn with_unknown_permission_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_unknown_permission = enabled;
        self
    }

    /// The grant table backing this registry
    pub fn table(&self) -> &RoleGrantTable {
        &self.table
    }
}
