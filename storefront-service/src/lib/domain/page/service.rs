use std::sync::Arc;

use async_trait::async_trait;

use super::errors::PageError;
use super::models::Page;
use super::models::PageDraft;
use super::models::PageId;
use super::models::Visibility;
use super::ports::PageRepository;
use super::ports::PageServicePort;
use crate::domain::values::Slug;

/// Concrete implementation of PageServicePort.
pub struct PageService<PR>
where
    PR: PageRepository,
{
    repository: Arc<PR>,
}

impl<PR> PageService<PR>
where
    PR: PageRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PageServicePort for PageService<PR>
where
    PR: PageRepository,
{
    async fn list_pages(&self, visibility: Visibility) -> Result<Vec<Page>, PageError> {
        self.repository.list(visibility).await
    }

    async fn get_page(&self, slug: &Slug, visibility: Visibility) -> Result<Page, PageError> {
        self.repository
            .find_by_slug(slug, visibility)
            .await?
            .ok_or_else(|| PageError::NotFound(slug.to_string()))
    }

    async fn create_page(&self, draft: PageDraft) -> Result<Page, PageError> {
        let page = self.repository.create(draft).await?;
        tracing::info!(
            page_id = %page.id,
            slug = %page.slug,
            published = page.published,
            "Page created"
        );
        Ok(page)
    }

    async fn update_page(&self, id: PageId, draft: PageDraft) -> Result<Page, PageError> {
        let page = self.repository.update(id, draft).await?;
        tracing::info!(page_id = %page.id, published = page.published, "Page updated");
        Ok(page)
    }

    async fn delete_page(&self, id: PageId) -> Result<(), PageError> {
        self.repository.delete(id).await?;
        tracing::info!(page_id = %id, "Page deleted");
        Ok(())
    }
}
