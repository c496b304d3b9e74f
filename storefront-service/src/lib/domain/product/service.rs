use std::sync::Arc;

use async_trait::async_trait;

use super::errors::ProductError;
use super::models::Product;
use super::models::ProductDraft;
use super::models::ProductId;
use super::ports::ProductRepository;
use super::ports::ProductServicePort;
use crate::domain::values::Slug;

/// Concrete implementation of ProductServicePort.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError> {
        self.repository.list(category).await
    }

    async fn get_product(&self, slug: &Slug) -> Result<Product, ProductError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ProductError::NotFound(slug.to_string()))
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let product = self.repository.create(draft).await?;
        tracing::info!(
            product_id = %product.id,
            sku = %product.sku,
            category_id = %product.category_id,
            "Product created"
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        let product = self.repository.update(id, draft).await?;
        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestProductRepository {}

        #[async_trait]
        impl ProductRepository for TestProductRepository {
            async fn list(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError>;
            async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Product>, ProductError>;
            async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError>;
            async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError>;
            async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
        }
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repository = MockTestProductRepository::new();
        repository.expect_find_by_slug().returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repository));
        let slug = Slug::new("missing-product".to_string()).unwrap();

        let result = service.get_product(&slug).await;
        assert!(matches!(result, Err(ProductError::NotFound(s)) if s == "missing-product"));
    }

    #[tokio::test]
    async fn test_list_products_forwards_category_filter() {
        let mut repository = MockTestProductRepository::new();
        repository
            .expect_list()
            .withf(|category| category.as_ref().map(Slug::as_str) == Some("electronics"))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = ProductService::new(Arc::new(repository));
        let category = Slug::new("electronics".to_string()).unwrap();

        let products = service.list_products(Some(category)).await.unwrap();
        assert!(products.is_empty());
    }
}
