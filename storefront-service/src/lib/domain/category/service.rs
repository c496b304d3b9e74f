use std::sync::Arc;

use async_trait::async_trait;

use super::errors::CategoryError;
use super::models::Category;
use super::models::CategoryDraft;
use super::models::CategoryId;
use super::ports::CategoryRepository;
use super::ports::CategoryServicePort;

/// Concrete implementation of CategoryServicePort.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn create_category(&self, draft: CategoryDraft) -> Result<Category, CategoryError> {
        let category = self.repository.create(draft).await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<Category, CategoryError> {
        let category = self.repository.update(id, draft).await?;
        tracing::info!(category_id = %category.id, "Category updated");
        Ok(category)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        self.repository.delete(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
