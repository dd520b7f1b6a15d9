//! Dog handlers: paginated list and create.

use crate::error::AppError;
use crate::model::{Page, SortAttribute, SortOrder};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub const CREATED_MESSAGE: &str = "Dog created successfully";

/// GET /dogs?attribute=&order=&pageNumber=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let attribute = params
        .get("attribute")
        .map(|s| s.parse::<SortAttribute>())
        .transpose()
        .map_err(AppError::from_list)?
        .unwrap_or_default();
    let order = params
        .get("order")
        .map(|s| s.parse::<SortOrder>())
        .transpose()
        .map_err(AppError::from_list)?
        .unwrap_or_default();
    let page = Page::parse(
        params.get("pageNumber").map(String::as_str),
        params.get("limit").map(String::as_str),
    )
    .map_err(AppError::from_list)?;

    let dogs = state.store.list(attribute, order, page).await.map_err(AppError::from_list)?;
    Ok(Json(dogs))
}

/// POST /dog
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(body) = body.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let dog = RequestValidator::new_dog(&body).map_err(AppError::from_create)?;
    let created = state.store.create(&dog).await.map_err(AppError::from_create)?;
    tracing::info!(id = created.id, name = %created.name, "dog created");
    Ok(CREATED_MESSAGE)
}
