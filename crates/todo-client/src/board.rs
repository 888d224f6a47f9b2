use tracing::debug;

use todo_types::{CreateTodoRequest, Todo, UpdateTodoRequest};

use crate::client::TodoClient;
use crate::error::ClientError;

/// The displayed todo list. Holds the last fetched snapshot and re-fetches
/// it through the gateway after every successful mutation.
pub struct TodoBoard {
    client: TodoClient,
    todos: Vec<Todo>,
}

impl TodoBoard {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
        }
    }

    /// Last loaded list, newest first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub async fn load(&mut self) -> Result<&[Todo], ClientError> {
        self.todos = self.client.list().await?;
        Ok(&self.todos)
    }

    /// Create a todo from user input. Blank input sends nothing and returns `None`.
    pub async fn add(&mut self, title: &str) -> Result<Option<Todo>, ClientError> {
        let title = title.trim();
        if title.is_empty() {
            debug!("Ignoring blank todo title");
            return Ok(None);
        }

        let created = self.client.create(&CreateTodoRequest::titled(title)).await?;
        self.load().await?;
        Ok(Some(created))
    }

    /// Flip completion of a displayed todo.
    pub async fn toggle(&mut self, id: i64) -> Result<Todo, ClientError> {
        let current = self
            .todos
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.is_completed)
            .ok_or(ClientError::NotFound(id))?;

        let req = UpdateTodoRequest {
            is_completed: Some(!current),
            ..Default::default()
        };
        let updated = self.client.update(id, &req).await?;
        self.load().await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.client.delete(id).await?;
        self.load().await?;
        Ok(())
    }
}
