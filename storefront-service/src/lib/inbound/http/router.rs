use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::carousel;
use super::handlers::categories;
use super::handlers::enquiries;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::pages;
use super::handlers::products;
use super::middleware::authenticate;
use super::middleware::require_role;
use super::middleware::ADMIN_ONLY;
use super::middleware::STAFF;
use crate::domain::carousel::ports::CarouselServicePort;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::enquiry::ports::EnquiryServicePort;
use crate::domain::page::ports::PageServicePort;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::AuthServicePort;

/// Shared handler state; services are held behind their ports.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub page_service: Arc<dyn PageServicePort>,
    pub carousel_service: Arc<dyn CarouselServicePort>,
    pub enquiry_service: Arc<dyn EnquiryServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/products", get(products::list_products))
        .route("/api/products/:key", get(products::get_product))
        .route("/api/pages", get(pages::list_published_pages))
        .route("/api/pages/:key", get(pages::get_published_page))
        .route("/api/carousel", get(carousel::list_slides))
        .route("/api/enquiries", post(enquiries::submit_enquiry));

    let admin_routes = Router::new()
        .route("/api/categories", post(categories::create_category))
        .route(
            "/api/categories/:id",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/api/products", post(products::create_product))
        .route(
            "/api/products/:key",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/pages", post(pages::create_page))
        .route(
            "/api/pages/:key",
            put(pages::update_page).delete(pages::delete_page),
        )
        .route("/api/carousel", post(carousel::create_slide))
        .route(
            "/api/carousel/:id",
            put(carousel::update_slide).delete(carousel::delete_slide),
        )
        .route("/api/enquiries", get(enquiries::list_enquiries))
        .route_layer(middleware::from_fn_with_state(ADMIN_ONLY, require_role));

    let staff_routes = Router::new()
        .route("/api/pages/admin/all", get(pages::list_all_pages))
        .route("/api/pages/admin/:slug", get(pages::get_any_page))
        .route_layer(middleware::from_fn_with_state(STAFF, require_role));

    let protected_routes = Router::new()
        .merge(admin_routes)
        .merge(staff_routes)
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
