//! Value objects shared by the catalog modules.

use std::fmt;

use thiserror::Error;

/// Error for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Slug '{0}' must be lowercase letters and digits separated by single hyphens")]
    InvalidFormat(String),
}

/// Error for Label validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for Cents validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CentsError {
    #[error("{field} must not be negative, got {actual}")]
    Negative { field: &'static str, actual: i64 },

    #[error("{field} is out of range: {actual}")]
    OutOfRange { field: &'static str, actual: i64 },
}

/// URL-safe identifier used in storefront paths.
///
/// Lowercase ASCII letters and digits in runs separated by single hyphens,
/// e.g. `wireless-headphones`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 128;

    /// Create a new validated slug.
    ///
    /// # Errors
    /// * `Empty` - Slug is empty
    /// * `TooLong` - Slug longer than 128 characters
    /// * `InvalidFormat` - Not hyphen-separated lowercase alphanumeric runs
    pub fn new(slug: String) -> Result<Self, SlugError> {
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }

        if slug.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: slug.len(),
            });
        }

        let well_formed = slug.split('-').all(|run| {
            !run.is_empty()
                && run
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });

        if well_formed {
            Ok(Self(slug))
        } else {
            Err(SlugError::InvalidFormat(slug))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required single-line text such as a name, title or SKU.
///
/// Surrounding whitespace is trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated label.
    ///
    /// # Arguments
    /// * `field` - Field name reported in validation errors
    /// * `value` - Raw text
    ///
    /// # Errors
    /// * `Empty` - Blank after trimming
    /// * `TooLong` - Longer than 255 characters
    pub fn new(field: &'static str, value: String) -> Result<Self, LabelError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(LabelError::Empty { field });
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(LabelError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative amount of money in minor units, stored as a Postgres INTEGER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(i32);

impl Cents {
    /// Create a validated amount.
    ///
    /// # Errors
    /// * `Negative` - Amount below zero
    /// * `OutOfRange` - Amount does not fit the storage column
    pub fn new(field: &'static str, amount: i64) -> Result<Self, CentsError> {
        if amount < 0 {
            return Err(CentsError::Negative {
                field,
                actual: amount,
            });
        }

        i32::try_from(amount)
            .map(Self)
            .map_err(|_| CentsError::OutOfRange {
                field,
                actual: amount,
            })
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
