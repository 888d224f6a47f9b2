use std::sync::Arc;

use todo_db::TodoRepository;

use crate::service::TodoService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub todos: TodoService,
}

impl AppStateInner {
    pub fn new(repo: Arc<dyn TodoRepository>) -> AppState {
        Arc::new(Self {
            todos: TodoService::new(repo),
        })
    }
}
