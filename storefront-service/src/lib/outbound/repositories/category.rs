use async_trait::async_trait;
use sqlx::PgPool;

use super::is_foreign_key_violation;
use super::unique_violation;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryDraft;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::values::Label;
use crate::domain::values::Slug;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    slug: String,
    sort_order: i32,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CategoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId(row.id),
            name: Label::new("name", row.name)?,
            slug: Slug::new(row.slug)?,
            sort_order: row.sort_order,
        })
    }
}

fn write_error(e: sqlx::Error, draft: &CategoryDraft) -> CategoryError {
    if unique_violation(&e).as_deref() == Some("categories_slug_key") {
        return CategoryError::SlugAlreadyExists(draft.slug.to_string());
    }
    CategoryError::DatabaseError(e.to_string())
}

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug, sort_order
            FROM categories
            ORDER BY sort_order ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, slug, sort_order)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, sort_order
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.slug.as_str())
        .bind(draft.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        Category::try_from(row)
    }

    async fn update(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, sort_order = $4
            WHERE id = $1
            RETURNING id, name, slug, sort_order
            "#,
        )
        .bind(id.0)
        .bind(draft.name.as_str())
        .bind(draft.slug.as_str())
        .bind(draft.sort_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        row.map(Category::try_from)
            .transpose()?
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return CategoryError::InUse(id.to_string());
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
