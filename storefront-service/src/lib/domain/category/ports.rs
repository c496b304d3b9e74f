use async_trait::async_trait;

use super::errors::CategoryError;
use super::models::Category;
use super::models::CategoryDraft;
use super::models::CategoryId;

/// Port for category operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// List every category in display order.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Create a category.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is taken
    /// * `DatabaseError` - Database operation failed
    async fn create_category(&self, draft: CategoryDraft) -> Result<Category, CategoryError>;

    /// Replace every field of an existing category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `SlugAlreadyExists` - Slug is taken by another category
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<Category, CategoryError>;

    /// Delete a category that no product references.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `InUse` - Products still reference the category
    /// * `DatabaseError` - Database operation failed
    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Retrieve all categories ordered by `sort_order` ascending.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Insert a category and return it with its assigned id.
    async fn create(&self, draft: CategoryDraft) -> Result<Category, CategoryError>;

    /// Overwrite a category; `NotFound` if no row matched.
    async fn update(&self, id: CategoryId, draft: CategoryDraft)
        -> Result<Category, CategoryError>;

    /// Remove a category; `NotFound` if no row matched, `InUse` on FK violation.
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}
