//! Helper functions for creating specific error types

use super::types::RbacError;

impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn constraint_violation<S: Into<String>>(message: S) -> Self {
        Self::ConstraintViolation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is a resolution miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
