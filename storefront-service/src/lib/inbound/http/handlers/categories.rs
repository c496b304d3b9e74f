use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryDraft;
use crate::domain::category::models::CategoryId;
use crate::domain::values::Label;
use crate::domain::values::Slug;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CategoryData>>, ApiError> {
    state
        .category_service
        .list_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| {
            ApiSuccess::new(
                StatusCode::OK,
                categories.iter().map(CategoryData::from).collect(),
            )
        })
}

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CategoryRequestBody>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .create_category(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<CategoryRequestBody>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .update_category(CategoryId(id), body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .category_service
        .delete_category(CategoryId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRequestBody {
    name: String,
    slug: String,
    #[serde(default)]
    sort_order: i32,
}

impl CategoryRequestBody {
    fn try_into_draft(self) -> Result<CategoryDraft, CategoryError> {
        Ok(CategoryDraft {
            name: Label::new("name", self.name)?,
            slug: Slug::new(self.slug)?,
            sort_order: self.sort_order,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub sort_order: i32,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
            sort_order: category.sort_order,
        }
    }
}
