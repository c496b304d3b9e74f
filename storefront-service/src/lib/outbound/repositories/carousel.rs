use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::carousel::errors::CarouselError;
use crate::domain::carousel::models::CarouselSlide;
use crate::domain::carousel::models::LinkType;
use crate::domain::carousel::models::SlideDraft;
use crate::domain::carousel::models::SlideEffect;
use crate::domain::carousel::models::SlideId;
use crate::domain::carousel::ports::CarouselRepository;
use crate::domain::values::Label;

#[derive(sqlx::FromRow)]
struct SlideRow {
    id: i32,
    title: String,
    subtitle: Option<String>,
    image_url: String,
    link_type: String,
    link_target: String,
    button_text: Option<String>,
    display_order: i32,
    effect: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SlideRow> for CarouselSlide {
    type Error = CarouselError;

    fn try_from(row: SlideRow) -> Result<Self, Self::Error> {
        Ok(CarouselSlide {
            id: SlideId(row.id),
            title: Label::new("title", row.title)?,
            subtitle: row.subtitle,
            image_url: Label::new("image_url", row.image_url)?,
            link_type: row.link_type.parse::<LinkType>()?,
            link_target: Label::new("link_target", row.link_target)?,
            button_text: row.button_text,
            order: row.display_order,
            effect: row.effect.parse::<SlideEffect>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct PostgresCarouselRepository {
    pool: PgPool,
}

impl PostgresCarouselRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarouselRepository for PostgresCarouselRepository {
    async fn list_all(&self) -> Result<Vec<CarouselSlide>, CarouselError> {
        let rows = sqlx::query_as::<_, SlideRow>(
            r#"
            SELECT id, title, subtitle, image_url, link_type, link_target,
                   button_text, display_order, effect, created_at, updated_at
            FROM carousel_slides
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CarouselError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CarouselSlide::try_from).collect()
    }

    async fn create(&self, draft: SlideDraft) -> Result<CarouselSlide, CarouselError> {
        let row = sqlx::query_as::<_, SlideRow>(
            r#"
            INSERT INTO carousel_slides (
                title, subtitle, image_url, link_type, link_target,
                button_text, display_order, effect
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, subtitle, image_url, link_type, link_target,
                      button_text, display_order, effect, created_at, updated_at
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.subtitle.as_deref())
        .bind(draft.image_url.as_str())
        .bind(draft.link_type.as_str())
        .bind(draft.link_target.as_str())
        .bind(draft.button_text.as_deref())
        .bind(draft.order)
        .bind(draft.effect.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CarouselError::DatabaseError(e.to_string()))?;

        CarouselSlide::try_from(row)
    }

    async fn update(
        &self,
        id: SlideId,
        draft: SlideDraft,
    ) -> Result<CarouselSlide, CarouselError> {
        let row = sqlx::query_as::<_, SlideRow>(
            r#"
            UPDATE carousel_slides
            SET title = $2, subtitle = $3, image_url = $4, link_type = $5,
                link_target = $6, button_text = $7, display_order = $8,
                effect = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, subtitle, image_url, link_type, link_target,
                      button_text, display_order, effect, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(draft.title.as_str())
        .bind(draft.subtitle.as_deref())
        .bind(draft.image_url.as_str())
        .bind(draft.link_type.as_str())
        .bind(draft.link_target.as_str())
        .bind(draft.button_text.as_deref())
        .bind(draft.order)
        .bind(draft.effect.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CarouselError::DatabaseError(e.to_string()))?;

        row.map(CarouselSlide::try_from)
            .transpose()?
            .ok_or_else(|| CarouselError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: SlideId) -> Result<(), CarouselError> {
        let result = sqlx::query(
            r#"
            DELETE FROM carousel_slides
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CarouselError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CarouselError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
