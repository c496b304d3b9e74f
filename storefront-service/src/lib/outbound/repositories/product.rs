use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use super::is_foreign_key_violation;
use super::unique_violation;
use crate::domain::category::models::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::values::Cents;
use crate::domain::values::Label;
use crate::domain::values::Slug;

const PRODUCT_COLUMNS: &str = r#"
    p.id, p.sku, p.name, p.slug, p.description_html, p.price_cents,
    p.main_image_url, p.images, p.metadata, p.category_id,
    c.name AS category_name, p.created_at, p.updated_at
"#;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    sku: String,
    name: String,
    slug: String,
    description_html: String,
    price_cents: i32,
    main_image_url: Option<String>,
    images: Option<Json<Value>>,
    metadata: Option<Json<Value>>,
    category_id: i32,
    category_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(row.id),
            sku: Label::new("sku", row.sku)?,
            name: Label::new("name", row.name)?,
            slug: Slug::new(row.slug)?,
            description_html: row.description_html,
            price: Cents::new("price_cents", i64::from(row.price_cents))?,
            main_image_url: row.main_image_url,
            images: row.images.map(|Json(value)| value),
            metadata: row.metadata.map(|Json(value)| value),
            category_id: CategoryId(row.category_id),
            category_name: row.category_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn write_error(e: sqlx::Error, draft: &ProductDraft) -> ProductError {
    match unique_violation(&e).as_deref() {
        Some("products_sku_key") => ProductError::SkuAlreadyExists(draft.sku.to_string()),
        Some("products_slug_key") => ProductError::SlugAlreadyExists(draft.slug.to_string()),
        _ if is_foreign_key_violation(&e) => {
            ProductError::UnknownCategory(draft.category_id.to_string())
        }
        _ => ProductError::DatabaseError(e.to_string()),
    }
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list(&self, category: Option<Slug>) -> Result<Vec<Product>, ProductError> {
        let query = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE $1::TEXT IS NULL OR c.slug = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(category.as_ref().map(Slug::as_str))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Product>, ProductError> {
        let query = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.slug = $1
            "#
        );

        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(Product::try_from).transpose()
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let query = format!(
            r#"
            WITH p AS (
                INSERT INTO products (
                    sku, name, slug, description_html, price_cents,
                    main_image_url, images, metadata, category_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
            )
            SELECT {PRODUCT_COLUMNS}
            FROM p
            JOIN categories c ON c.id = p.category_id
            "#
        );

        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(draft.sku.as_str())
            .bind(draft.name.as_str())
            .bind(draft.slug.as_str())
            .bind(&draft.description_html)
            .bind(draft.price.value())
            .bind(draft.main_image_url.as_deref())
            .bind(draft.images.clone().map(Json))
            .bind(draft.metadata.clone().map(Json))
            .bind(draft.category_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(e, &draft))?;

        Product::try_from(row)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError> {
        let query = format!(
            r#"
            WITH p AS (
                UPDATE products
                SET sku = $2, name = $3, slug = $4, description_html = $5,
                    price_cents = $6, main_image_url = $7, images = $8,
                    metadata = $9, category_id = $10, updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {PRODUCT_COLUMNS}
            FROM p
            JOIN categories c ON c.id = p.category_id
            "#
        );

        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id.0)
            .bind(draft.sku.as_str())
            .bind(draft.name.as_str())
            .bind(draft.slug.as_str())
            .bind(&draft.description_html)
            .bind(draft.price.value())
            .bind(draft.main_image_url.as_deref())
            .bind(draft.images.clone().map(Json))
            .bind(draft.metadata.clone().map(Json))
            .bind(draft.category_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, &draft))?;

        row.map(Product::try_from)
            .transpose()?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
