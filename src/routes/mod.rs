//! Router assembly.

mod common;
mod dogs;

pub use common::{common_routes, PING_BODY};
pub use dogs::dog_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full service: /ping, /dogs, /dog with body limit and request tracing.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(dog_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
