use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::enquiry::errors::EnquiryError;
use crate::domain::enquiry::models::ContactInfo;
use crate::domain::enquiry::models::Enquiry;
use crate::domain::enquiry::models::EnquiryItem;
use crate::domain::enquiry::models::EnquiryStatus;
use crate::domain::enquiry::models::NewEnquiry;
use crate::inbound::http::router::AppState;

pub async fn submit_enquiry(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<EnquiryRequestBody>,
) -> Result<ApiSuccess<EnquiryData>, ApiError> {
    let enquiry = NewEnquiry::new(body.user_info, body.items, body.total_cents)
        .map_err(EnquiryError::from)?;

    state
        .enquiry_service
        .submit_enquiry(enquiry)
        .await
        .map_err(ApiError::from)
        .map(|enquiry| ApiSuccess::new(StatusCode::CREATED, enquiry.into()))
}

pub async fn list_enquiries(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EnquiryData>>, ApiError> {
    state
        .enquiry_service
        .list_enquiries()
        .await
        .map_err(ApiError::from)
        .map(|enquiries| {
            ApiSuccess::new(
                StatusCode::OK,
                enquiries.into_iter().map(EnquiryData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnquiryRequestBody {
    user_info: ContactInfo,
    items: Vec<EnquiryItem>,
    total_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryData {
    pub id: i32,
    pub user_info: ContactInfo,
    pub items: Vec<EnquiryItem>,
    pub total_cents: i32,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Enquiry> for EnquiryData {
    fn from(enquiry: Enquiry) -> Self {
        Self {
            id: enquiry.id.0,
            user_info: enquiry.user_info,
            items: enquiry.items,
            total_cents: enquiry.total.value(),
            status: enquiry.status,
            created_at: enquiry.created_at,
            updated_at: enquiry.updated_at,
        }
    }
}
