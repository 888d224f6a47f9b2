use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;

use todo_types::HealthResponse;

use crate::state::AppState;

/// GET /health — 200 when the store answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.todos.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".into(),
                database: "up".into(),
            }),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "error".into(),
                    database: "down".into(),
                }),
            )
        }
    }
}
