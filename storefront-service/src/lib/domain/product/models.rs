use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde_json::Value;

use crate::domain::category::models::CategoryId;
use crate::domain::values::Cents;
use crate::domain::values::Label;
use crate::domain::values::Slug;

/// Catalog item, always read together with the name of its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: Label,
    pub name: Label,
    pub slug: Slug,
    pub description_html: String,
    pub price: Cents,
    pub main_image_url: Option<String>,
    /// Free-form gallery data, stored as JSONB
    pub images: Option<Value>,
    /// Free-form attributes, stored as JSONB
    pub metadata: Option<Value>,
    pub category_id: CategoryId,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product identifier (database serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated product fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub sku: Label,
    pub name: Label,
    pub slug: Slug,
    pub description_html: String,
    pub price: Cents,
    pub category_id: CategoryId,
    pub main_image_url: Option<String>,
    pub images: Option<Value>,
    pub metadata: Option<Value>,
}
