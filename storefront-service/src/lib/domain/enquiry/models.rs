use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::EnquiryStatusError;
use super::errors::EnquiryValidationError;
use crate::domain::user::models::EmailAddress;
use crate::domain::values::Cents;

/// Quote request submitted from the storefront cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub user_info: ContactInfo,
    pub items: Vec<EnquiryItem>,
    pub total: Cents,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enquiry identifier (database serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnquiryId(pub i32);

impl fmt::Display for EnquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact details of the visitor, persisted as a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One cart line, snapshotted at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryItem {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i32,
}

/// Processing state of an enquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnquiryStatus {
    #[default]
    New,
    Responded,
    Resolved,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::New => "NEW",
            EnquiryStatus::Responded => "RESPONDED",
            EnquiryStatus::Resolved => "RESOLVED",
        }
    }
}

impl FromStr for EnquiryStatus {
    type Err = EnquiryStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(EnquiryStatus::New),
            "RESPONDED" => Ok(EnquiryStatus::Responded),
            "RESOLVED" => Ok(EnquiryStatus::Resolved),
            other => Err(EnquiryStatusError::Unknown(other.to_string())),
        }
    }
}

/// A validated submission, ready to be stored with status `NEW`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnquiry {
    user_info: ContactInfo,
    items: Vec<EnquiryItem>,
    total: Cents,
}

impl NewEnquiry {
    /// Validate a raw submission.
    ///
    /// # Errors
    /// * `NoItems` - Empty item list
    /// * `MissingName` - Blank contact name
    /// * `InvalidEmail` - Contact email is not an address
    /// * `InvalidQuantity` - An item quantity below 1
    /// * `InvalidAmount` - Negative item price or total
    pub fn new(
        user_info: ContactInfo,
        items: Vec<EnquiryItem>,
        total_cents: i64,
    ) -> Result<Self, EnquiryValidationError> {
        if items.is_empty() {
            return Err(EnquiryValidationError::NoItems);
        }

        if user_info.name.trim().is_empty() {
            return Err(EnquiryValidationError::MissingName);
        }

        EmailAddress::new(user_info.email.clone())?;

        for (index, item) in items.iter().enumerate() {
            if item.quantity < 1 {
                return Err(EnquiryValidationError::InvalidQuantity {
                    index,
                    actual: item.quantity,
                });
            }
            Cents::new("price_cents", i64::from(item.price_cents))?;
        }

        let total = Cents::new("total_cents", total_cents)?;

        Ok(Self {
            user_info,
            items,
            total,
        })
    }

    pub fn user_info(&self) -> &ContactInfo {
        &self.user_info
    }

    pub fn items(&self) -> &[EnquiryItem] {
        &self.items
    }

    pub fn total(&self) -> Cents {
        self.total
    }
}
