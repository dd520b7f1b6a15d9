//! Common routes: health check.

use axum::{routing::get, Router};

pub const PING_BODY: &str = "Dogshouseservice.Version1.0.1";

async fn ping() -> &'static str {
    PING_BODY
}

/// GET /ping. Never touches the store.
pub fn common_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/ping", get(ping))
}
