//! Bearer token access check.
//!
//! When an API token is configured, every request must carry
//! `Authorization: Bearer <token>`. Without a configured token the site is
//! open, matching the public content endpoints it serves.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that rejects requests without the configured bearer token.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token() else {
        return next.run(request).await;
    };

    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| bool::from(token.as_bytes().ct_eq(expected.as_bytes())));

    if !authorized {
        tracing::debug!(path = %request.uri().path(), "rejected request without valid token");
        return AppError::AccessDenied.into_response();
    }

    next.run(request).await
}
