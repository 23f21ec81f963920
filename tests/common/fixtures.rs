//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use std::io::Write;
use tempfile::NamedTempFile;

/// Role strings that must never resolve
pub const UNKNOWN_ROLES: &[&str] = &[
    "",
    "root",
    "superuser",
    "Admin",
    "VIEWER",
    " analyst",
    "analyst\n",
    "admin:investigation",
    "viewer,admin",
];

/// Factory for configuration documents
pub struct ConfigFactory;

impl ConfigFactory {
    /// Configuration that keeps the compiled-in table
    pub fn default_yaml() -> &'static str {
        r#"
rbac:
  warn_on_unknown_permission: false
logging:
  level: "info"
"#
    }

    /// Configuration that replaces the grant table with a minimal one
    pub fn read_only_yaml() -> &'static str {
        r#"
rbac:
  warn_on_unknown_permission: true
  grants:
    admin: ["investigation:read", "report:read", "settings:manage"]
    analyst: ["investigation:read", "report:read"]
    viewer: ["investigation:read"]
"#
    }

    /// Configuration whose viewer outranks its analyst
    pub fn inverted_yaml() -> &'static str {
        r#"
rbac:
  grants:
    admin: ["evidence:read", "evidence:delete"]
    analyst: ["evidence:read"]
    viewer: ["evidence:read", "evidence:delete"]
"#
    }

    /// Write a document to a temporary file
    pub fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(content.as_bytes()).expect("write temp config");
        file
    }
}
