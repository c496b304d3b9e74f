use thiserror::Error;

use crate::domain::user::errors::EmailError;
use crate::domain::values::CentsError;

/// Error for enquiry payload validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnquiryValidationError {
    #[error("Enquiry must contain at least one item")]
    NoItems,

    #[error("Contact name must not be empty")]
    MissingName,

    #[error("Invalid contact email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Item {index} quantity must be at least 1, got {actual}")]
    InvalidQuantity { index: usize, actual: i32 },

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] CentsError),
}

/// Error for EnquiryStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnquiryStatusError {
    #[error("Unknown enquiry status: {0}")]
    Unknown(String),
}

/// Top-level error for enquiry operations
#[derive(Debug, Clone, Error)]
pub enum EnquiryError {
    #[error("Invalid enquiry: {0}")]
    Invalid(#[from] EnquiryValidationError),

    #[error("Invalid stored enquiry: {0}")]
    InvalidStatus(#[from] EnquiryStatusError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
