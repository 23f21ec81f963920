//! Permission checking methods

use crate::utils::error::{RbacError, Result};
use std::collections::HashSet;
use tracing::warn;

use super::system::PermissionRegistry;
use super::types::{Permission, PermissionCheck};

impl PermissionRegistry {
    /// Check if a role grants a permission
    ///
    /// Unknown roles are denied and logged.
    pub fn has_permission(&self, role: &str, permission: Permission) -> bool {
        match self.resolve_role(role) {
            Some(role) => self.table.grants(role, permission),
            None => false,
        }
    }

    /// Get all permissions for a role
    ///
    /// Unknown roles get an empty set and are logged.
    pub fn get_role_permissions(&self, role: &str) -> HashSet<Permission> {
        self.resolve_role(role)
            .and_then(|role| self.table.permissions(role))
            .cloned()
            .unwrap_or_default()
    }

    /// Check resource-level permissions
    ///
    /// An unknown `resource:action` pair is denied without a warning unless
    /// the registry was built with unknown-permission warnings enabled.
    pub fn can_access_resource(&self, role: &str, resource_type: &str, action: &str) -> bool {
        match Permission::from_parts(resource_type, action) {
            Some(permission) => self.has_permission(role, permission),
            None => {
                if self.warn_on_unknown_permission {
                    warn!(
                        role = ?role,
                        resource = ?resource_type,
                        action = ?action,
                        "Unknown permission in resource check, denying access"
                    );
                }
                false
            }
        }
    }

    /// Detailed permission check
    pub fn check_permission_detailed(&self, role: &str, permission: Permission) -> PermissionCheck {
        let Some(resolved) = self.resolve_role(role) else {
            return PermissionCheck::denied(None, permission, format!("Unknown role: {:?}", role));
        };

        if self.table.grants(resolved, permission) {
            PermissionCheck::granted(resolved, permission)
        } else {
            PermissionCheck::denied(
                Some(resolved),
                permission,
                format!("Missing permission: {}", permission),
            )
        }
    }

    /// Require a permission, failing with an authorization error on denial
    pub fn require_permission(&self, role: &str, permission: Permission) -> Result<()> {
        let check = self.check_permission_detailed(role, permission);
        if check.granted {
            return Ok(());
        }

        let reason = check
            .denial_reason
            .unwrap_or_else(|| format!("Missing permission: {}", permission));
        Err(RbacError::authorization(reason))
    }

    /// Check if a role grants every one of the required permissions
    ///
    /// Unknown roles are denied even when nothing is required.
    pub fn has_all_permissions(&self, role: &str, required: &[Permission]) -> bool {
        match self.resolve_role(role) {
            Some(role) => required.iter().all(|p| self.table.grants(role, *p)),
            None => false,
        }
    }

    /// Check if a role grants any of the required permissions
    pub fn has_any_permission(&self, role: &str, required: &[Permission]) -> bool {
        match self.resolve_role(role) {
            Some(role) => required.iter().any(|p| self.table.grants(role, *p)),
            None => false,
        }
    }
}
