use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use todo_types::{NewTodo, Todo};

use crate::Database;
use crate::models::{TodoRow, format_timestamp};
use crate::repository::TodoRepository;

const TODO_COLUMNS: &str = "id, title, description, is_completed, created_at, updated_at";

impl TodoRepository for Database {
    fn create(&self, new: &NewTodo, now: DateTime<Utc>) -> Result<Todo> {
        let ts = format_timestamp(now);
        self.with_tx(|tx| {
            tx.execute(
                "INSERT INTO todos (title, description, is_completed, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                rusqlite::params![new.title, new.description, new.is_completed, ts],
            )?;
            let id = tx.last_insert_rowid();
            query_todo_by_id(tx, id)?
                .ok_or_else(|| anyhow::anyhow!("Inserted todo {} not readable", id))
        })
    }

    fn find(&self) -> Result<Vec<Todo>> {
        self.with_conn(query_todos)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        self.with_conn(|conn| query_todo_by_id(conn, id))
    }

    fn save(&self, todo: &Todo) -> Result<Option<Todo>> {
        self.with_tx(|tx| {
            let changed = tx.execute(
                "UPDATE todos SET title = ?2, description = ?3, is_completed = ?4, updated_at = ?5
                 WHERE id = ?1",
                rusqlite::params![
                    todo.id,
                    todo.title,
                    todo.description,
                    todo.is_completed,
                    format_timestamp(todo.updated_at),
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            query_todo_by_id(tx, todo.id)
        })
    }

    fn delete(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }

    fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM todos", [], |r| r.get(0))?;
            Ok(n as u64)
        })
    }

    fn ping(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))?;
            Ok(())
        })
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TodoRow> {
    Ok(TodoRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn query_todo_by_id(conn: &Connection, id: i64) -> Result<Option<Todo>> {
    let mut stmt = conn.prepare(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1"))?;

    let row = stmt.query_row([id], read_row).optional()?;

    row.map(TodoRow::into_todo).transpose()
}

fn query_todos(conn: &Connection) -> Result<Vec<Todo>> {
    // id breaks ties between rows created within the same microsecond
    let mut stmt = conn.prepare(&format!(
        "SELECT {TODO_COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt
        .query_map([], read_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter().map(TodoRow::into_todo).collect()
}
