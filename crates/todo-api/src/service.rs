use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error};

use todo_db::TodoRepository;
use todo_types::{NewTodo, Todo, TodoPatch};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Todo with ID {0} not found")]
    NotFound(i64),

    #[error("store failure: {0}")]
    Store(#[from] anyhow::Error),
}

/// Existence checks and partial updates over a [`TodoRepository`].
///
/// Every store call runs on the blocking pool, so each method suspends
/// once per store round trip.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new: NewTodo) -> Result<Todo, ServiceError> {
        let now = Utc::now();
        self.blocking(move |repo| Ok(repo.create(&new, now)?)).await
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        self.blocking(|repo| Ok(repo.find()?)).await
    }

    pub async fn find_one(&self, id: i64) -> Result<Todo, ServiceError> {
        self.blocking(move |repo| repo.find_by_id(id)?.ok_or(ServiceError::NotFound(id)))
            .await
    }

    pub async fn update(&self, id: i64, patch: TodoPatch) -> Result<Todo, ServiceError> {
        if patch.is_empty() {
            debug!("Empty patch for todo {}, only updated_at changes", id);
        }
        let now = Utc::now();
        self.blocking(move |repo| {
            let existing = repo.find_by_id(id)?.ok_or(ServiceError::NotFound(id))?;
            let next = overlay(&existing, &patch, now);
            // A concurrent delete between the read and the write also lands here.
            repo.save(&next)?.ok_or(ServiceError::NotFound(id))
        })
        .await
    }

    /// Deletes the todo and hands back its last stored state.
    pub async fn remove(&self, id: i64) -> Result<Todo, ServiceError> {
        self.blocking(move |repo| {
            let existing = repo.find_by_id(id)?.ok_or(ServiceError::NotFound(id))?;
            if !repo.delete(id)? {
                return Err(ServiceError::NotFound(id));
            }
            Ok(existing)
        })
        .await
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.blocking(|repo| Ok(repo.ping()?)).await
    }

    async fn blocking<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&dyn TodoRepository) -> Result<T, ServiceError> + Send + 'static,
        T: Send + 'static,
    {
        let repo = self.repo.clone();
        let result = tokio::task::spawn_blocking(move || f(repo.as_ref()))
            .await
            .map_err(|e| {
                error!("spawn_blocking join error: {}", e);
                ServiceError::Store(anyhow::anyhow!("store task failed: {}", e))
            })?;

        if let Err(ServiceError::NotFound(id)) = &result {
            debug!("Todo {} not found", id);
        }
        result
    }
}

/// Field-by-field overlay of `patch` onto a snapshot of `existing`.
///
/// `updated_at` never moves backwards and never precedes `created_at`,
/// even if the wall clock does.
pub fn overlay(existing: &Todo, patch: &TodoPatch, now: DateTime<Utc>) -> Todo {
    Todo {
        id: existing.id,
        title: patch.title.clone().unwrap_or_else(|| existing.title.clone()),
        description: match &patch.description {
            Some(d) => d.clone(),
            None => existing.description.clone(),
        },
        is_completed: patch.is_completed.unwrap_or(existing.is_completed),
        created_at: existing.created_at,
        updated_at: now.max(existing.updated_at).max(existing.created_at),
    }
}
