//! HTTP route handlers.

pub mod health;
pub mod node;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
///
/// Layers (last added = first executed): TraceLayer → access check → routes.
/// `/health` sits outside the access check so probes need no token.
pub fn app(state: AppState) -> Router {
    let protected = node::router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        crate::middleware::require_api_token,
    ));

    Router::new()
        .merge(protected)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
