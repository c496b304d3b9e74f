use thiserror::Error;

use crate::domain::values::LabelError;
use crate::domain::values::SlugError;

/// Top-level error for content page operations
#[derive(Debug, Clone, Error)]
pub enum PageError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] LabelError),

    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Page slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
