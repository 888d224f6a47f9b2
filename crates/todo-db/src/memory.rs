use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Utc};
use todo_types::{NewTodo, Todo};

use crate::repository::TodoRepository;

/// Map-backed fake used in tests. Ids come from a counter and are never reused.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Todo>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow::anyhow!("In-memory store lock poisoned: {}", e))
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create(&self, new: &NewTodo, now: DateTime<Utc>) -> Result<Todo> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: new.title.clone(),
            description: new.description.clone(),
            is_completed: new.is_completed,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    fn find(&self) -> Result<Vec<Todo>> {
        let inner = self.lock()?;
        let mut todos: Vec<Todo> = inner.rows.values().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(todos)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn save(&self, todo: &Todo) -> Result<Option<Todo>> {
        let mut inner = self.lock()?;
        match inner.rows.get_mut(&todo.id) {
            Some(row) => {
                row.title = todo.title.clone();
                row.description = todo.description.clone();
                row.is_completed = todo.is_completed;
                row.updated_at = todo.updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.lock()?.rows.len() as u64)
    }

    fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }
}
