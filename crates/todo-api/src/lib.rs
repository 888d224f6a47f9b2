pub mod error;
pub mod health;
pub mod service;
pub mod state;
pub mod todos;
pub mod validation;

#[cfg(test)]
mod test_support;

use axum::{Router, routing::get};

pub use error::ApiError;
pub use service::{ServiceError, TodoService};
pub use state::{AppState, AppStateInner};

/// Versioned todo resource plus the health probe. Cross-cutting layers
/// (CORS, tracing, headers) are added by the server binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/v1/todos/{id}",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/health", get(health::health))
        .with_state(state)
}
