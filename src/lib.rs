//! # casefile-rbac
//!
//! Role-based access control for investigation case management.
//!
//! Three roles (`admin`, `analyst`, `viewer`) map to a fixed set of
//! `resource:action` permissions. The [`PermissionRegistry`] answers
//! authorization queries against that table; queries are total and treat
//! anything unrecognized as "access denied".
//!
//! ## Quick Start
//!
//! ```rust
//! use casefile_rbac::{Permission, PermissionRegistry};
//!
//! let registry = PermissionRegistry::global();
//!
//! assert!(registry.has_permission("analyst", Permission::EvidenceUpload));
//! assert!(registry.can_access_resource("admin", "investigation", "delete"));
//! assert!(!registry.can_access_resource("viewer", "investigation", "delete"));
//! assert!(registry.get_role_permissions("intern").is_empty());
//! ```
//!
//! ## From configuration
//!
//! ```rust,no_run
//! use casefile_rbac::{Config, PermissionRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rbac.yaml").await?;
//!     let registry = PermissionRegistry::from_config(config.rbac())?;
//!     println!("{} grants loaded", registry.table().len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{Permission, PermissionCheck, PermissionRegistry, Role, RoleGrantTable};
pub use config::{Config, LoggingConfig, RbacConfig};
pub use utils::error::{RbacError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("CASEFILE_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("CASEFILE_GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("CASEFILE_RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
