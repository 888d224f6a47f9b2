use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{validate_create, validate_patch};

/// POST /v1/todos
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let new = validate_create(&body).map_err(|errors| {
        debug!("Rejected todo create: {:?}", errors);
        ApiError::Validation(errors)
    })?;

    let todo = state.todos.create(new).await?;
    info!("Created todo {}", todo.id);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /v1/todos — newest first.
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.todos.find_all().await?))
}

/// GET /v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.todos.find_one(id).await?))
}

/// PATCH /v1/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch = validate_patch(&body).map_err(|errors| {
        debug!("Rejected todo {} patch: {:?}", id, errors);
        ApiError::Validation(errors)
    })?;

    let todo = state.todos.update(id, patch).await?;
    info!("Updated todo {}", todo.id);

    Ok(Json(todo))
}

/// DELETE /v1/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let removed = state.todos.remove(id).await?;
    info!("Deleted todo {} ({:?})", removed.id, removed.title);

    Ok(StatusCode::NO_CONTENT)
}
