//! Error handling for roleguard
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{RbacError, Result};
