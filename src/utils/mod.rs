//! Utility modules for roleguard
//!
//! - **error**: Error taxonomy and the crate-wide `Result` alias

pub mod error;

pub use error::{RbacError, Result};
