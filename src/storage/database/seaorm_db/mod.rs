// Module declarations
mod assignment_ops;
mod connection;
mod permission_ops;
mod role_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
