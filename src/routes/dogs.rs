//! Dog collection routes.

use crate::handlers::{create, list};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn dog_routes(state: AppState) -> Router {
    Router::new()
        .route("/dogs", get(list))
        .route("/dog", post(create))
        .with_state(state)
}
