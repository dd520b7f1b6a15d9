//! End-to-end checks against a live PostgreSQL.
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test dogs_db -- --ignored
//! The table is dropped and reseeded, so point this at a scratch database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use dogshouse::{app, bootstrap, AppState};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

async fn fresh_app() -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    let state = AppState::new(pool);
    bootstrap(&state.store).await.unwrap();
    app(state, 64 * 1024)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn list(app: &Router, uri: &str) -> Vec<Value> {
    let (status, body) = send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK, "{}: {}", uri, body);
    serde_json::from_str(&body).unwrap()
}

async fn create(app: &Router, body: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("POST")
        .uri("/dog")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

fn names(rows: &[Value]) -> Vec<&str> {
    rows.iter().map(|r| r["name"].as_str().unwrap()).collect()
}

// One test so the destructive bootstrap never races another test.
#[tokio::test]
#[ignore = "requires database"]
async fn dog_service_against_database() {
    let app = fresh_app().await;

    let rows = list(&app, "/dogs").await;
    assert_eq!(names(&rows), ["Jessy", "Neo"]);
    assert_eq!(rows[0]["color"], "black & white");
    assert_eq!(rows[0]["tail_length"], 7);
    assert_eq!(rows[0]["weight"], 14);
    assert!(rows[0]["id"].is_i64());

    let rows = list(&app, "/dogs?limit=1&pageNumber=2").await;
    assert_eq!(names(&rows), ["Neo"]);

    let rows = list(&app, "/dogs?order=DESC").await;
    assert_eq!(names(&rows), ["Neo", "Jessy"]);

    let doggy = r#"{"name":"Doggy","color":"red","tail_length":173,"weight":33}"#;
    assert_eq!(create(&app, doggy).await, (StatusCode::OK, "Dog created successfully".to_string()));
    assert_eq!(
        create(&app, doggy).await,
        (StatusCode::BAD_REQUEST, "Dog with the same name already exists".to_string())
    );
    assert_eq!(
        create(&app, r#"{"name":"Stubby","color":"tan","tail_length":-1,"weight":3}"#).await,
        (StatusCode::BAD_REQUEST, "Invalid input data".to_string())
    );

    let rows = list(&app, "/dogs").await;
    assert_eq!(names(&rows), ["Doggy", "Jessy", "Neo"]);

    let rows = list(&app, "/dogs?attribute=weight&order=desc").await;
    let weights: Vec<i64> = rows.iter().map(|r| r["weight"].as_i64().unwrap()).collect();
    assert!(weights.windows(2).all(|w| w[0] >= w[1]), "{:?}", weights);
    assert_eq!(weights, [33, 32, 14]);

    let (status, body) = send(&app, Request::builder().uri("/ping").body(Body::empty()).unwrap()).await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, "Dogshouseservice.Version1.0.1"));

    // Bootstrap wipes runtime inserts.
    let app = fresh_app().await;
    assert_eq!(names(&list(&app, "/dogs").await), ["Jessy", "Neo"]);
}
