use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::page::errors::PageError;
use crate::domain::page::models::Page;
use crate::domain::page::models::PageDraft;
use crate::domain::page::models::PageId;
use crate::domain::page::models::Visibility;
use crate::domain::values::Label;
use crate::domain::values::Slug;
use crate::inbound::http::router::AppState;

/// Published pages, without their content.
pub async fn list_published_pages(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PageSummaryData>>, ApiError> {
    state
        .page_service
        .list_pages(Visibility::PublishedOnly)
        .await
        .map_err(ApiError::from)
        .map(|pages| {
            ApiSuccess::new(StatusCode::OK, pages.iter().map(PageSummaryData::from).collect())
        })
}

pub async fn get_published_page(
    state: State<AppState>,
    slug: ApiPath<String>,
) -> Result<ApiSuccess<PageData>, ApiError> {
    get_page(state, slug, Visibility::PublishedOnly).await
}

pub async fn list_all_pages(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PageData>>, ApiError> {
    state
        .page_service
        .list_pages(Visibility::All)
        .await
        .map_err(ApiError::from)
        .map(|pages| ApiSuccess::new(StatusCode::OK, pages.iter().map(PageData::from).collect()))
}

pub async fn get_any_page(
    state: State<AppState>,
    slug: ApiPath<String>,
) -> Result<ApiSuccess<PageData>, ApiError> {
    get_page(state, slug, Visibility::All).await
}

pub async fn create_page(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PageRequestBody>,
) -> Result<ApiSuccess<PageData>, ApiError> {
    state
        .page_service
        .create_page(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::CREATED, page.into()))
}

pub async fn update_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<PageRequestBody>,
) -> Result<ApiSuccess<PageData>, ApiError> {
    state
        .page_service
        .update_page(PageId(id), body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}

pub async fn delete_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .page_service
        .delete_page(PageId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

async fn get_page(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    visibility: Visibility,
) -> Result<ApiSuccess<PageData>, ApiError> {
    let slug = Slug::new(slug).map_err(|_| ApiError::NotFound("Page not found".to_string()))?;

    state
        .page_service
        .get_page(&slug, visibility)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageRequestBody {
    title: String,
    slug: String,
    #[serde(default)]
    content_html: String,
    #[serde(default)]
    published: bool,
}

impl PageRequestBody {
    fn try_into_draft(self) -> Result<PageDraft, PageError> {
        Ok(PageDraft {
            title: Label::new("title", self.title)?,
            slug: Slug::new(self.slug)?,
            content_html: self.content_html,
            published: self.published,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Page> for PageData {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.0,
            title: page.title.as_str().to_string(),
            slug: page.slug.as_str().to_string(),
            content_html: page.content_html.clone(),
            published: page.published,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummaryData {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&Page> for PageSummaryData {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.0,
            title: page.title.as_str().to_string(),
            slug: page.slug.as_str().to_string(),
            updated_at: page.updated_at,
        }
    }
}
