//! Subjects: anything that can hold roles and permissions
//!
//! Association rows store the subject as a `(model_type, model_id)` pair, so
//! two host types may share identifiers without their grants colliding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Implemented by host entities (users, service accounts, ...) that hold roles and permissions
pub trait Subject {
    /// Type tag stored alongside the identifier
    fn subject_type(&self) -> &str;

    /// Stable identifier of this instance within its type
    fn subject_id(&self) -> String;

    fn subject_key(&self) -> SubjectKey {
        SubjectKey::new(self.subject_type(), self.subject_id())
    }
}

/// Owned `(type, id)` pair identifying a subject in association rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectKey {
    pub subject_type: String,
    pub subject_id: String,
}

impl SubjectKey {
    pub fn new(subject_type: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            subject_type: subject_type.into(),
            subject_id: subject_id.into(),
        }
    }
}

impl Subject for SubjectKey {
    fn subject_type(&self) -> &str {
        &self.subject_type
    }

    fn subject_id(&self) -> String {
        self.subject_id.clone()
    }

    fn subject_key(&self) -> SubjectKey {
        self.clone()
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.subject_type, self.subject_id)
    }
}
