use thiserror::Error;

use crate::domain::values::LabelError;
use crate::domain::values::SlugError;

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] LabelError),

    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Cannot delete category {0}: it is associated with existing products")]
    InUse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
