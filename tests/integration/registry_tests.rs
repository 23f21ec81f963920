//! Registry integration tests
//!
//! Queries against the compiled-in grant table through the public API.

#[cfg(test)]
mod tests {
    use crate::common::UNKNOWN_ROLES;
    use crate::common::assertions::RegistryAssertions;
    use casefile_rbac::{Permission, PermissionRegistry, RbacError, Role};

    // ==================== Resolution ====================

    #[test]
    fn test_unknown_roles_are_denied() {
        let registry = PermissionRegistry::default();
        for role in UNKNOWN_ROLES {
            registry.assert_denies_everything(role);
        }
    }

    #[test]
    fn test_known_roles_resolve_by_identifier() {
        let registry = PermissionRegistry::default();
        for role in Role::all() {
            assert!(!registry.get_role_permissions(role.as_str()).is_empty());
        }
    }

    // ==================== Hierarchy ====================

    #[test]
    fn test_hierarchy_is_monotonic() {
        let registry = PermissionRegistry::default();
        registry.assert_contained(Role::Viewer, Role::Analyst);
        registry.assert_contained(Role::Analyst, Role::Admin);
        registry.assert_contained(Role::Viewer, Role::Admin);
    }

    #[test]
    fn test_only_admin_manages_users_and_settings() {
        let registry = PermissionRegistry::default();
        for role in Role::all() {
            let expected = *role == Role::Admin;
            assert_eq!(registry.has_permission(role.as_str(), Permission::UserManage), expected);
            assert_eq!(
                registry.has_permission(role.as_str(), Permission::SettingsManage),
                expected
            );
        }
    }

    // ==================== Resource Access ====================

    #[test]
    fn test_can_access_resource_agrees_with_has_permission() {
        let registry = PermissionRegistry::default();
        for role in Role::all() {
            for permission in Permission::all() {
                assert_eq!(
                    registry.can_access_resource(
                        role.as_str(),
                        permission.resource(),
                        permission.action()
                    ),
                    registry.has_permission(role.as_str(), *permission)
                );
            }
        }
    }

    #[test]
    fn test_documented_resource_checks() {
        let registry = PermissionRegistry::global();
        assert!(registry.can_access_resource("admin", "investigation", "delete"));
        assert!(!registry.can_access_resource("viewer", "investigation", "delete"));
        assert!(!registry.can_access_resource("viewer", "bogus", "noop"));
    }

    // ==================== Role Name Checks ====================

    #[test]
    fn test_role_name_checks() {
        let registry = PermissionRegistry::global();

        assert!(registry.is_admin("admin"));
        assert!(!registry.is_admin("viewer"));
        assert!(!registry.is_admin("not-a-role"));

        assert!(registry.is_analyst("admin"));
        assert!(registry.is_analyst("analyst"));
        assert!(!registry.is_analyst("viewer"));
    }

    #[test]
    fn test_role_name_checks_match_rank() {
        let registry = PermissionRegistry::global();
        for role in Role::all() {
            assert_eq!(registry.is_admin(role.as_str()), role.at_least(Role::Admin));
            assert_eq!(registry.is_analyst(role.as_str()), role.at_least(Role::Analyst));
        }
    }

    // ==================== Enforcement ====================

    #[test]
    fn test_require_permission_round_trip() {
        let registry = PermissionRegistry::global();

        registry
            .require_permission("analyst", Permission::EvidenceUpload)
            .unwrap();

        match registry.require_permission("nobody", Permission::EvidenceRead) {
            Err(RbacError::Authorization(msg)) => assert!(msg.contains("nobody")),
            other => panic!("expected authorization error, got {:?}", other),
        }
    }
}
