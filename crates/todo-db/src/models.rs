//! Database row types — these map directly to SQLite rows.
//! Distinct from todo-types models to keep the DB layer independent.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use todo_types::Todo;

pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl TodoRow {
    pub fn into_todo(self) -> Result<Todo> {
        let created_at = parse_timestamp(&self.created_at)
            .with_context(|| format!("corrupt created_at on todo {}", self.id))?;
        let updated_at = parse_timestamp(&self.updated_at)
            .with_context(|| format!("corrupt updated_at on todo {}", self.id))?;

        Ok(Todo {
            id: self.id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            created_at,
            updated_at,
        })
    }
}

/// Fixed-width UTC form so that text ordering in SQL matches time ordering.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_timestamps() {
        let ts = parse_timestamp("2025-01-02T03:04:05.000006Z").unwrap();
        assert_eq!(ts.timestamp_subsec_micros(), 6);
        assert_eq!(parse_timestamp(&format_timestamp(ts)).unwrap(), ts);
        assert!(parse_timestamp("2025-01-02 03:04:05").is_err());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn formatted_timestamps_sort_as_text() {
        let early = format_timestamp(parse_timestamp("2025-01-02T03:04:05Z").unwrap());
        let late = format_timestamp(parse_timestamp("2025-01-02T03:04:05.5Z").unwrap());
        assert!(early < late);
    }
}
