//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Database configuration validators
//! - `rbac_validators`: Guard and seed validators

mod rbac_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
