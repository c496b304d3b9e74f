use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::unique_violation;
use crate::domain::page::errors::PageError;
use crate::domain::page::models::Page;
use crate::domain::page::models::PageDraft;
use crate::domain::page::models::PageId;
use crate::domain::page::models::Visibility;
use crate::domain::page::ports::PageRepository;
use crate::domain::values::Label;
use crate::domain::values::Slug;

#[derive(sqlx::FromRow)]
struct PageRow {
    id: i32,
    title: String,
    slug: String,
    content_html: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = PageError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId(row.id),
            title: Label::new("title", row.title)?,
            slug: Slug::new(row.slug)?,
            content_html: row.content_html,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn write_error(e: sqlx::Error, draft: &PageDraft) -> PageError {
    if unique_violation(&e).as_deref() == Some("pages_slug_key") {
        return PageError::SlugAlreadyExists(draft.slug.to_string());
    }
    PageError::DatabaseError(e.to_string())
}

pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Page>, PageError> {
        let query = match visibility {
            Visibility::PublishedOnly => {
                r#"
                SELECT id, title, slug, content_html, published, created_at, updated_at
                FROM pages
                WHERE published = TRUE
                ORDER BY title ASC
                "#
            }
            Visibility::All => {
                r#"
                SELECT id, title, slug, content_html, published, created_at, updated_at
                FROM pages
                ORDER BY updated_at DESC
                "#
            }
        };

        let rows = sqlx::query_as::<_, PageRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Page::try_from).collect()
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        visibility: Visibility,
    ) -> Result<Option<Page>, PageError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            SELECT id, title, slug, content_html, published, created_at, updated_at
            FROM pages
            WHERE slug = $1 AND (published OR NOT $2)
            "#,
        )
        .bind(slug.as_str())
        .bind(visibility == Visibility::PublishedOnly)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        row.map(Page::try_from).transpose()
    }

    async fn create(&self, draft: PageDraft) -> Result<Page, PageError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            INSERT INTO pages (title, slug, content_html, published)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, slug, content_html, published, created_at, updated_at
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.slug.as_str())
        .bind(&draft.content_html)
        .bind(draft.published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        Page::try_from(row)
    }

    async fn update(&self, id: PageId, draft: PageDraft) -> Result<Page, PageError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            UPDATE pages
            SET title = $2, slug = $3, content_html = $4, published = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, content_html, published, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(draft.title.as_str())
        .bind(draft.slug.as_str())
        .bind(&draft.content_html)
        .bind(draft.published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft))?;

        row.map(Page::try_from)
            .transpose()?
            .ok_or_else(|| PageError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: PageId) -> Result<(), PageError> {
        let result = sqlx::query(
            r#"
            DELETE FROM pages
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PageError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
