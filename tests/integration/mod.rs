//! Integration tests for casefile-rbac
//!
//! These tests exercise the public API without reaching into internals.

pub mod config_tests;
pub mod registry_tests;
