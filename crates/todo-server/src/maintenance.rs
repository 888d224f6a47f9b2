//! Seeding and inspection helpers behind the `todo-admin` binary.

use anyhow::Result;
use chrono::{Duration, Utc};
use todo_db::TodoRepository;
use todo_types::{NewTodo, Todo};

pub const SAMPLE_TITLES: &[&str] = &[
    "Learn SQL",
    "Build REST API",
    "Write tests",
    "Deploy to production",
];

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    /// Table already had rows; nothing was written.
    Skipped(u64),
}

/// Insert the sample todos, but only into an empty table.
pub fn seed(repo: &dyn TodoRepository) -> Result<SeedOutcome> {
    let existing = repo.count()?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped(existing));
    }

    // One millisecond apart so creation order is unambiguous.
    let start = Utc::now();
    for (i, title) in SAMPLE_TITLES.iter().enumerate() {
        repo.create(&NewTodo::titled(*title), start + Duration::milliseconds(i as i64))?;
    }
    Ok(SeedOutcome::Seeded(SAMPLE_TITLES.len()))
}

/// Plain-text table of todos for terminal output.
pub fn render_table(todos: &[Todo]) -> String {
    let title_width = todos
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("title".len());

    let mut out = format!(
        "{:>5}  {:<title_width$}  {:<4}  {}\n",
        "id", "title", "done", "created_at"
    );
    for t in todos {
        out.push_str(&format!(
            "{:>5}  {:<title_width$}  {:<4}  {}\n",
            t.id,
            t.title,
            if t.is_completed { "yes" } else { "no" },
            t.created_at.to_rfc3339(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use todo_db::InMemoryTodoRepository;

    use super::*;

    #[test]
    fn seeds_empty_store_once() {
        let repo = InMemoryTodoRepository::new();

        assert_eq!(seed(&repo).unwrap(), SeedOutcome::Seeded(4));
        assert_eq!(seed(&repo).unwrap(), SeedOutcome::Skipped(4));
        assert_eq!(repo.count().unwrap(), 4);

        let newest = &repo.find().unwrap()[0];
        assert_eq!(newest.title, "Deploy to production");
        assert!(!newest.is_completed);
    }

    #[test]
    fn table_lists_every_row() {
        let repo = InMemoryTodoRepository::new();
        seed(&repo).unwrap();
        let table = render_table(&repo.find().unwrap());

        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().next().unwrap().contains("title"));
        for title in SAMPLE_TITLES {
            assert!(table.contains(title));
        }
    }
}
