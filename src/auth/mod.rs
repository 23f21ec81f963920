//! Authorization
//!
//! Authentication happens upstream; by the time a request reaches this layer
//! the caller's role claim is an untrusted string to be resolved here.

pub mod rbac;

pub use rbac::{Permission, PermissionCheck, PermissionRegistry, Role, RoleGrantTable};
