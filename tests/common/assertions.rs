//! Custom test assertions

use casefile_rbac::{Permission, PermissionRegistry, Role};

/// Assertions over a registry
pub trait RegistryAssertions {
    /// Assert the role string resolves to nothing at all
    fn assert_denies_everything(&self, role: &str);

    /// Assert `lower`'s permissions are contained in `higher`'s
    fn assert_contained(&self, lower: Role, higher: Role);
}

impl RegistryAssertions for PermissionRegistry {
    fn assert_denies_everything(&self, role: &str) {
        assert!(
            self.get_role_permissions(role).is_empty(),
            "Expected no permissions for {:?}",
            role
        );
        for permission in Permission::all() {
            assert!(
                !self.has_permission(role, *permission),
                "Expected {:?} to be denied {}",
                role,
                permission
            );
        }
    }

    fn assert_contained(&self, lower: Role, higher: Role) {
        let lower_set = self.get_role_permissions(lower.as_str());
        let higher_set = self.get_role_permissions(higher.as_str());
        let extra: Vec<_> = lower_set.difference(&higher_set).collect();
        assert!(
            extra.is_empty(),
            "{} holds permissions {} lacks: {:?}",
            lower,
            higher,
            extra
        );
    }
}
