//! Configuration integration tests
//!
//! Registries built from configuration files on disk.

#[cfg(test)]
mod tests {
    use crate::common::ConfigFactory;
    use crate::common::assertions::RegistryAssertions;
    use casefile_rbac::{Config, Permission, PermissionRegistry, RbacError, Role, RoleGrantTable};

    #[tokio::test]
    async fn test_default_config_file_keeps_builtin_table() {
        let file = ConfigFactory::write(ConfigFactory::default_yaml());
        let config = Config::from_file(file.path()).await.unwrap();

        let registry = PermissionRegistry::from_config(config.rbac()).unwrap();
        assert_eq!(registry.table(), &RoleGrantTable::default());
    }

    #[tokio::test]
    async fn test_custom_grants_replace_builtin_table() {
        let file = ConfigFactory::write(ConfigFactory::read_only_yaml());
        let config = Config::from_file(file.path()).await.unwrap();
        let registry = PermissionRegistry::from_config(config.rbac()).unwrap();

        assert!(registry.has_permission("admin", Permission::SettingsManage));
        assert!(!registry.has_permission("admin", Permission::InvestigationDelete));
        assert!(!registry.has_permission("analyst", Permission::EvidenceUpload));
        assert!(!registry.can_access_resource("admin", "bogus", "noop"));

        registry.assert_contained(Role::Viewer, Role::Analyst);
        registry.assert_contained(Role::Analyst, Role::Admin);
    }

    #[tokio::test]
    async fn test_inverted_hierarchy_is_rejected() {
        let file = ConfigFactory::write(ConfigFactory::inverted_yaml());
        let err = Config::from_file(file.path()).await.unwrap_err();

        assert!(matches!(err, RbacError::Config(_)));
        assert!(err.to_string().contains("evidence:delete"));
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_rejected() {
        let file = ConfigFactory::write("rbac: [this is not a map");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, RbacError::Config(msg) if msg.contains("parse")));
    }

    #[test]
    fn test_config_round_trips_custom_grants() {
        let config = Config::from_yaml(ConfigFactory::read_only_yaml()).unwrap();
        let yaml = config.to_yaml().unwrap();
        let reparsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(reparsed, config);
    }
}
