//! Core domain types shared by the storage layer and the authorization engine

pub mod models;
