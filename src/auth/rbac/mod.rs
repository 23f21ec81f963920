//! Role-Based Access Control (RBAC) system
//!
//! A fixed table maps each [`Role`] to the [`Permission`]s it grants, and a
//! [`PermissionRegistry`] answers authorization queries against it. Queries
//! never fail: unknown roles or permissions resolve to a denial.

mod permissions;
mod roles;
mod system;
mod table;
mod types;

// Re-export public types and structs
pub use system::PermissionRegistry;
pub use table::RoleGrantTable;
pub use types::{Permission, PermissionCheck, Role};
