//! Node projection endpoints.
//!
//! - `GET /get/node/{id}`: basic page envelope
//! - `GET /get/article/{id}`: article fields keyed by node uuid
//! - `GET /get/recruitment/{id}`: recruitment industry page

use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::envelope::NodeView;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a node id path segment.
fn parse_id(raw: &str) -> AppResult<u64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid node id: {raw}")))
}

/// Load and project a node for `view`.
///
/// The node is loaded before anything is projected; an unknown id fails
/// with the view's not-found error.
fn respond(state: &AppState, view: NodeView, raw_id: &str) -> AppResult<Response> {
    let id = parse_id(raw_id)?;
    let node = state
        .store()
        .load_node(id)
        .ok_or(AppError::NodeNotFound(view))?;

    let body = view.render(&state.projector(), &node);
    let cache_control = HeaderValue::from_str(&format!("max-age={}", state.cache_max_age()))
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(([(header::CACHE_CONTROL, cache_control)], Json(body)).into_response())
}

async fn get_node(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    respond(&state, NodeView::Basic, &id)
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    respond(&state, NodeView::Article, &id)
}

async fn get_recruitment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    respond(&state, NodeView::Recruitment, &id)
}

/// Create the node projection router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get/node/{id}", get(get_node))
        .route("/get/article/{id}", get(get_article))
        .route("/get/recruitment/{id}", get(get_recruitment))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_unsigned_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("-1"), Err(AppError::BadRequest(_))));
    }
}
