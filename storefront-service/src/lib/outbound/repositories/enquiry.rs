use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::enquiry::errors::EnquiryError;
use crate::domain::enquiry::models::ContactInfo;
use crate::domain::enquiry::models::Enquiry;
use crate::domain::enquiry::models::EnquiryId;
use crate::domain::enquiry::models::EnquiryItem;
use crate::domain::enquiry::models::EnquiryStatus;
use crate::domain::enquiry::models::NewEnquiry;
use crate::domain::enquiry::ports::EnquiryRepository;
use crate::domain::values::Cents;

#[derive(sqlx::FromRow)]
struct EnquiryRow {
    id: i32,
    user_info: Json<ContactInfo>,
    items: Json<Vec<EnquiryItem>>,
    total_cents: i32,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EnquiryRow> for Enquiry {
    type Error = EnquiryError;

    fn try_from(row: EnquiryRow) -> Result<Self, Self::Error> {
        let total = Cents::new("total_cents", i64::from(row.total_cents))
            .map_err(|e| EnquiryError::DatabaseError(e.to_string()))?;

        Ok(Enquiry {
            id: EnquiryId(row.id),
            user_info: row.user_info.0,
            items: row.items.0,
            total,
            status: row.status.parse::<EnquiryStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct PostgresEnquiryRepository {
    pool: PgPool,
}

impl PostgresEnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnquiryRepository for PostgresEnquiryRepository {
    async fn create(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError> {
        let row = sqlx::query_as::<_, EnquiryRow>(
            r#"
            INSERT INTO enquiries (user_info, items, total_cents, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_info, items, total_cents, status, created_at, updated_at
            "#,
        )
        .bind(Json(enquiry.user_info()))
        .bind(Json(enquiry.items()))
        .bind(enquiry.total().value())
        .bind(EnquiryStatus::New.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EnquiryError::DatabaseError(e.to_string()))?;

        Enquiry::try_from(row)
    }

    async fn list_all(&self) -> Result<Vec<Enquiry>, EnquiryError> {
        let rows = sqlx::query_as::<_, EnquiryRow>(
            r#"
            SELECT id, user_info, items, total_cents, status, created_at, updated_at
            FROM enquiries
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EnquiryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Enquiry::try_from).collect()
    }
}
