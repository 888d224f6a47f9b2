pub mod api;
pub mod models;

pub use api::{CreateTodoRequest, ErrorBody, FieldError, HealthResponse, UpdateTodoRequest};
pub use models::{NewTodo, Todo, TodoPatch};
