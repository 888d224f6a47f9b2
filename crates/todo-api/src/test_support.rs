use chrono::{DateTime, Utc};

use todo_db::TodoRepository;
use todo_types::{NewTodo, Todo};

/// Store that fails every call.
pub struct BrokenRepository;

impl TodoRepository for BrokenRepository {
    fn create(&self, _: &NewTodo, _: DateTime<Utc>) -> anyhow::Result<Todo> {
        anyhow::bail!("disk on fire")
    }
    fn find(&self) -> anyhow::Result<Vec<Todo>> {
        anyhow::bail!("disk on fire")
    }
    fn find_by_id(&self, _: i64) -> anyhow::Result<Option<Todo>> {
        anyhow::bail!("disk on fire")
    }
    fn save(&self, _: &Todo) -> anyhow::Result<Option<Todo>> {
        anyhow::bail!("disk on fire")
    }
    fn delete(&self, _: i64) -> anyhow::Result<bool> {
        anyhow::bail!("disk on fire")
    }
    fn count(&self) -> anyhow::Result<u64> {
        anyhow::bail!("disk on fire")
    }
    fn ping(&self) -> anyhow::Result<()> {
        anyhow::bail!("disk on fire")
    }
}
