//! SQLite-backed todo store. Every operation round-trips to the database;
//! nothing is cached in memory.

use std::path::Path;

use rusqlite::{Connection, params};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::Todo;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    todo TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

const TODO_COLUMNS: &str = "id, todo, created_at, updated_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
    #[error("todo text must not be empty")]
    EmptyText,
}

impl StoreError {
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Unavailable(_) => {
                "The todo store could not be reached. Please try again.".to_string()
            }
            StoreError::EmptyText => {
                "A todo needs some text before it can be saved.".to_string()
            }
        }
    }
}

pub struct TodoStore {
    conn: Mutex<Connection>,
}

impl TodoStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        info!(path = %path.display(), "Opened todo store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare(&format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id ASC"))?;
        let rows = stmt.query_map([], row_to_todo)?;
        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }

    pub async fn create(&self, text: &str) -> Result<i64, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let conn = self.conn.lock().await;
        conn.execute("INSERT INTO todos (todo) VALUES (?1)", params![text])?;
        let id = conn.last_insert_rowid();
        debug!(id, "Created todo");
        Ok(id)
    }

    /// Soft semantics: deleting an id with no matching row is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let affected = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        debug!(id, affected, "Deleted todo rows");
        Ok(())
    }

    /// Case-insensitive substring match; an empty query matches every record.
    pub async fn search(&self, query: &str) -> Result<Vec<Todo>, StoreError> {
        let pattern = format!("%{query}%");
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE todo LIKE ?1 ORDER BY id ASC"
        ))?;
        let rows = stmt.query_map(params![pattern], row_to_todo)?;
        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        todo: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}
