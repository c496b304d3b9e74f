use async_trait::async_trait;

use super::errors::PageError;
use super::models::Page;
use super::models::PageDraft;
use super::models::PageId;
use super::models::Visibility;
use crate::domain::values::Slug;

/// Port for content page operations.
#[async_trait]
pub trait PageServicePort: Send + Sync + 'static {
    /// Published pages ordered by title, or every page ordered by most
    /// recently updated.
    async fn list_pages(&self, visibility: Visibility) -> Result<Vec<Page>, PageError>;

    /// Retrieve a page by slug.
    ///
    /// # Errors
    /// * `NotFound` - No page with this slug is visible
    async fn get_page(&self, slug: &Slug, visibility: Visibility) -> Result<Page, PageError>;

    /// Create a page.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is taken
    async fn create_page(&self, draft: PageDraft) -> Result<Page, PageError>;

    /// Replace every field of an existing page.
    ///
    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `SlugAlreadyExists` - Slug is taken by another page
    async fn update_page(&self, id: PageId, draft: PageDraft) -> Result<Page, PageError>;

    /// Delete a page.
    ///
    /// # Errors
    /// * `NotFound` - Page does not exist
    async fn delete_page(&self, id: PageId) -> Result<(), PageError>;
}

/// Persistence operations for content pages.
#[async_trait]
pub trait PageRepository: Send + Sync + 'static {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Page>, PageError>;

    async fn find_by_slug(
        &self,
        slug: &Slug,
        visibility: Visibility,
    ) -> Result<Option<Page>, PageError>;

    async fn create(&self, draft: PageDraft) -> Result<Page, PageError>;

    /// Overwrite a page; `NotFound` if no row matched.
    async fn update(&self, id: PageId, draft: PageDraft) -> Result<Page, PageError>;

    /// Remove a page; `NotFound` if no row matched.
    async fn delete(&self, id: PageId) -> Result<(), PageError>;
}
