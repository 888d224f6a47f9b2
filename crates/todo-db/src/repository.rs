use anyhow::Result;
use chrono::{DateTime, Utc};
use todo_types::{NewTodo, Todo};

/// Storage capability handed to the service at construction.
///
/// Calls are blocking; async callers run them on the blocking pool.
pub trait TodoRepository: Send + Sync {
    /// Insert a row stamped with `now` for both timestamps. The store assigns the id.
    fn create(&self, new: &NewTodo, now: DateTime<Utc>) -> Result<Todo>;

    /// All rows, most recently created first.
    fn find(&self) -> Result<Vec<Todo>>;

    fn find_by_id(&self, id: i64) -> Result<Option<Todo>>;

    /// Overwrite the mutable columns of an existing row. Returns the stored
    /// row, or `None` if it no longer exists.
    fn save(&self, todo: &Todo) -> Result<Option<Todo>>;

    /// Returns whether a row was removed.
    fn delete(&self, id: i64) -> Result<bool>;

    fn count(&self) -> Result<u64>;

    /// Cheap round trip used by the health check.
    fn ping(&self) -> Result<()>;
}
