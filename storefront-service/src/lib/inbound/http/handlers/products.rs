use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use super::ApiJson;
use super::ApiPath;
use super::ApiSuccess;
use crate::domain::category::models::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::values::Cents;
use crate::domain::values::Label;
use crate::domain::values::Slug;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    // An unknown or malformed category slug matches nothing.
    let category = match params.category {
        Some(raw) => match Slug::new(raw) {
            Ok(slug) => Some(slug),
            Err(_) => return Ok(ApiSuccess::new(StatusCode::OK, Vec::new())),
        },
        None => None,
    };

    state
        .product_service
        .list_products(category)
        .await
        .map_err(ApiError::from)
        .map(|products| {
            ApiSuccess::new(StatusCode::OK, products.iter().map(ProductData::from).collect())
        })
}

pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let slug = Slug::new(slug).map_err(|_| ApiError::NotFound("Product not found".to_string()))?;

    state
        .product_service
        .get_product(&slug)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .create_product(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<ProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .update_product(ProductId(id), body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .product_service
        .delete_product(ProductId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsParams {
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequestBody {
    sku: String,
    name: String,
    slug: String,
    #[serde(default)]
    description_html: String,
    price_cents: i64,
    category_id: i32,
    main_image_url: Option<String>,
    images: Option<Value>,
    metadata: Option<Value>,
}

impl ProductRequestBody {
    fn try_into_draft(self) -> Result<ProductDraft, ProductError> {
        Ok(ProductDraft {
            sku: Label::new("sku", self.sku)?,
            name: Label::new("name", self.name)?,
            slug: Slug::new(self.slug)?,
            description_html: self.description_html,
            price: Cents::new("price_cents", self.price_cents)?,
            category_id: CategoryId(self.category_id),
            main_image_url: self.main_image_url.filter(|url| !url.trim().is_empty()),
            images: self.images,
            metadata: self.metadata,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub slug: String,
    pub description_html: String,
    pub price_cents: i32,
    pub main_image_url: Option<String>,
    pub images: Option<Value>,
    pub metadata: Option<Value>,
    pub category_id: i32,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            sku: product.sku.as_str().to_string(),
            name: product.name.as_str().to_string(),
            slug: product.slug.as_str().to_string(),
            description_html: product.description_html.clone(),
            price_cents: product.price.value(),
            main_image_url: product.main_image_url.clone(),
            images: product.images.clone(),
            metadata: product.metadata.clone(),
            category_id: product.category_id.0,
            category_name: product.category_name.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
