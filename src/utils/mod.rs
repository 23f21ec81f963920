//! Utility modules
//!
//! - **error**: Error types and helpers
//! - **logging**: Subscriber setup for binaries

pub mod error;
pub mod logging;

pub use error::{RbacError, Result};
