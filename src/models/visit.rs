use crate::errors::{AppError, AppResult};

/// A person being revisited. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactVisit {
    pub id: i64,
    pub name: String,
    pub note: String,
    pub is_study: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitFields {
    pub name: String,
    pub note: String,
    pub is_study: bool,
}

impl VisitFields {
    pub fn new(name: impl Into<String>, note: impl Into<String>, is_study: bool) -> Self {
        Self {
            name: name.into().trim().to_string(),
            note: note.into().trim().to_string(),
            is_study,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("visit name must not be empty".into()));
        }
        Ok(())
    }
}
