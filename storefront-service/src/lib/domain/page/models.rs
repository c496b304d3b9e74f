use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::values::Label;
use crate::domain::values::Slug;

/// CMS page (About, Contact, ...). Only published pages are publicly visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: Label,
    pub slug: Slug,
    pub content_html: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Page identifier (database serial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated page fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub title: Label,
    pub slug: Slug,
    pub content_html: String,
    pub published: bool,
}

/// Which pages a read may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    PublishedOnly,
    All,
}
