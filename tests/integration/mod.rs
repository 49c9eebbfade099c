//! Integration tests for roleguard
//!
//! These tests verify the interaction between the RBAC engine and the
//! SeaORM store without mocking.

pub mod config_validation_tests;
pub mod database_tests;
pub mod rbac_tests;
