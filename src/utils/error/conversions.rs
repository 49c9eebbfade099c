//! Type conversions for RbacError

use super::types::RbacError;
use sea_orm::{DbErr, SqlErr};

// Constraint failures are classified so callers can tell a duplicate name
// from a dangling reference without parsing driver messages.
impl From<DbErr> for RbacError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => RbacError::Conflict(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                RbacError::ConstraintViolation(message)
            }
            _ => RbacError::Database(err),
        }
    }
}
