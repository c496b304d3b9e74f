use async_trait::async_trait;

use super::errors::ProductError;
use super::models::Product;
use super::models::ProductDraft;
use super::models::ProductId;
use crate::domain::values::Slug;

/// Port for product operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// List products, newest first, optionally restricted to one category.
    ///
    /// An unknown category slug yields an empty list.
    async fn list_products(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError>;

    /// Retrieve one product by slug.
    ///
    /// # Errors
    /// * `NotFound` - No product with this slug
    async fn get_product(&self, slug: &Slug) -> Result<Product, ProductError>;

    /// Create a product.
    ///
    /// # Errors
    /// * `SkuAlreadyExists` / `SlugAlreadyExists` - Unique field taken
    /// * `UnknownCategory` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Replace every field of an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `SkuAlreadyExists` / `SlugAlreadyExists` - Unique field taken
    /// * `UnknownCategory` - Referenced category does not exist
    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError>;

    /// Delete a product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Products joined with their category, `created_at` descending.
    async fn list(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError>;

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Product>, ProductError>;

    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Overwrite a product; `NotFound` if no row matched.
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Remove a product; `NotFound` if no row matched.
    async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}
