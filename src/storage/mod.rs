//! Storage layer for roleguard
//!
//! Roles, permissions and their association tables live in a relational
//! database accessed through SeaORM.

/// Database storage module
pub mod database;

pub use database::Database;
