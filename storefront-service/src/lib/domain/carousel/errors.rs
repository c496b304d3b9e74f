use thiserror::Error;

use crate::domain::values::LabelError;

/// Error for carousel enum parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlideAttributeError {
    #[error("Unknown link type: {0} (expected PRODUCT, PAGE or EXTERNAL)")]
    UnknownLinkType(String),

    #[error("Unknown effect: {0} (expected SLIDE or FADE)")]
    UnknownEffect(String),
}

/// Top-level error for carousel operations
#[derive(Debug, Clone, Error)]
pub enum CarouselError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] LabelError),

    #[error("Invalid slide attribute: {0}")]
    InvalidAttribute(#[from] SlideAttributeError),

    #[error("Slide not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
