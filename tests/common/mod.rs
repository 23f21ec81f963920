//! Common test utilities for casefile-rbac

pub mod assertions;
pub mod fixtures;

pub use fixtures::{ConfigFactory, UNKNOWN_ROLES};
