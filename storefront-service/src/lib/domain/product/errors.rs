use thiserror::Error;

use crate::domain::values::CentsError;
use crate::domain::values::LabelError;
use crate::domain::values::SlugError;

/// Top-level error for product operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] LabelError),

    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] CentsError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product SKU already exists: {0}")]
    SkuAlreadyExists(String),

    #[error("Product slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Category does not exist: {0}")]
    UnknownCategory(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
