use std::fmt;

use crate::domain::values::Label;
use crate::domain::values::Slug;

/// Product grouping shown in storefront navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: Label,
    pub slug: Slug,
    pub sort_order: i32,
}

/// Category identifier (database serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated category fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: Label,
    pub slug: Slug,
    pub sort_order: i32,
}
