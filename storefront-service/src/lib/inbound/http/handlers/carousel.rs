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
use crate::domain::carousel::errors::CarouselError;
use crate::domain::carousel::models::CarouselSlide;
use crate::domain::carousel::models::LinkType;
use crate::domain::carousel::models::SlideDraft;
use crate::domain::carousel::models::SlideEffect;
use crate::domain::carousel::models::SlideId;
use crate::domain::values::Label;
use crate::inbound::http::router::AppState;

pub async fn list_slides(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SlideData>>, ApiError> {
    state
        .carousel_service
        .list_slides()
        .await
        .map_err(ApiError::from)
        .map(|slides| ApiSuccess::new(StatusCode::OK, slides.iter().map(SlideData::from).collect()))
}

pub async fn create_slide(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SlideRequestBody>,
) -> Result<ApiSuccess<SlideData>, ApiError> {
    state
        .carousel_service
        .create_slide(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref slide| ApiSuccess::new(StatusCode::CREATED, slide.into()))
}

pub async fn update_slide(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<SlideRequestBody>,
) -> Result<ApiSuccess<SlideData>, ApiError> {
    state
        .carousel_service
        .update_slide(SlideId(id), body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref slide| ApiSuccess::new(StatusCode::OK, slide.into()))
}

pub async fn delete_slide(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .carousel_service
        .delete_slide(SlideId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideRequestBody {
    title: String,
    subtitle: Option<String>,
    image_url: String,
    link_type: String,
    link_target: String,
    button_text: Option<String>,
    #[serde(default)]
    order: i32,
    effect: Option<String>,
}

impl SlideRequestBody {
    fn try_into_draft(self) -> Result<SlideDraft, CarouselError> {
        let effect = match self.effect {
            Some(effect) => effect.parse::<SlideEffect>()?,
            None => SlideEffect::default(),
        };

        Ok(SlideDraft {
            title: Label::new("title", self.title)?,
            subtitle: self.subtitle,
            image_url: Label::new("image_url", self.image_url)?,
            link_type: self.link_type.parse::<LinkType>()?,
            link_target: Label::new("link_target", self.link_target)?,
            button_text: self.button_text,
            order: self.order,
            effect,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideData {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_type: LinkType,
    pub link_target: String,
    pub button_text: Option<String>,
    pub order: i32,
    pub effect: SlideEffect,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CarouselSlide> for SlideData {
    fn from(slide: &CarouselSlide) -> Self {
        Self {
            id: slide.id.0,
            title: slide.title.as_str().to_string(),
            subtitle: slide.subtitle.clone(),
            image_url: slide.image_url.as_str().to_string(),
            link_type: slide.link_type,
            link_target: slide.link_target.as_str().to_string(),
            button_text: slide.button_text.clone(),
            order: slide.order,
            effect: slide.effect,
            created_at: slide.created_at,
            updated_at: slide.updated_at,
        }
    }
}
