use std::sync::Arc;

use auth::Authenticator;
use auth::Role;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use http::header::AUTHORIZATION;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;

/// Role set for catalog mutations and enquiry listing.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Role set for administrative content reads.
pub const STAFF: &[Role] = &[Role::Admin, Role::Editor];

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Middleware that validates the bearer token and adds the caller to request extensions.
///
/// Every failure produces the same 401 body; the cause is only logged.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(|reason| {
        tracing::warn!(reason, "Authentication failed");
        ApiError::not_authenticated().into_response()
    })?;

    let identity = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Authentication failed");
        ApiError::not_authenticated().into_response()
    })?;

    let user_id = UserId::from_string(&identity.subject_id).map_err(|e| {
        tracing::warn!(error = %e, "Authentication failed");
        ApiError::not_authenticated().into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        role: identity.role,
    });

    Ok(next.run(req).await)
}

/// Middleware that admits only callers whose role is in `allowed`.
///
/// Must run inside [`authenticate`]; a request without an authenticated
/// caller is answered with 401, a caller with any other role with 403.
pub async fn require_role(
    State(allowed): State<&'static [Role]>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(user) = req.extensions().get::<AuthenticatedUser>() else {
        return Err(ApiError::not_authenticated().into_response());
    };

    if !user.role.is_one_of(allowed) {
        tracing::warn!(
            user_id = %user.user_id,
            role = %user.role,
            uri = %req.uri(),
            "Access denied"
        );
        return Err(ApiError::forbidden().into_response());
    }

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, &'static str> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or("missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "non-ASCII Authorization header")?;

    auth_str
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or("Authorization header is not a Bearer token")
}
