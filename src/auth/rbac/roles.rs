//! Role resolution and role-name checks

use tracing::warn;

use super::system::PermissionRegistry;
use super::types::Role;

impl PermissionRegistry {
    /// Resolve a raw role string, warning when it is unknown
    pub(super) fn resolve_role(&self, role: &str) -> Option<Role> {
        let resolved = Role::parse(role);
        if resolved.is_none() {
            warn!(role = ?role, "Unknown role in permission check, denying access");
        }
        resolved
    }

    /// Whether `role` is exactly the admin role
    pub fn is_admin(&self, role: &str) -> bool {
        role == Role::ADMIN
    }

    /// Whether `role` is analyst or higher
    pub fn is_analyst(&self, role: &str) -> bool {
        role == Role::ADMIN || role == Role::ANALYST
    }

    /// List all roles, highest privilege first
    pub fn list_roles(&self) -> Vec<Role> {
        Role::all().to_vec()
    }
}
