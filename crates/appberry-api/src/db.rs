//! SQLite-backed demo table.
//!
//! The `dummy` table holds `(id, description)` rows. The connection lives
//! behind a mutex and every query runs on the blocking thread pool.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Primary key of the row the demo route rewrites.
pub const DEMO_ROW_ID: &str = "test_id";
/// Description stored in the demo row.
pub const DEMO_ROW_DESCRIPTION: &str = "test description";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS dummy (
        id          TEXT PRIMARY KEY NOT NULL,
        description TEXT NOT NULL
    );
";

/// One row of the `dummy` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRow {
    pub id: String,
    pub description: String,
}

/// Shared handle to the demo database.
#[derive(Clone, Debug)]
pub struct DemoStore {
    conn: Arc<Mutex<Connection>>,
}

impl DemoStore {
    /// Open (or create) the database at `path`. The path `:memory:` opens a
    /// private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let conn = if path == Path::new(":memory:") {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        debug!(path = %path.display(), "opened demo database");
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, ApiError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Delete the demo row, insert it again, and return every row.
    ///
    /// The three statements run in one transaction.
    pub async fn reset_demo_row(&self) -> Result<Vec<DemoRow>, ApiError> {
        self.run(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM dummy WHERE id = ?1", params![DEMO_ROW_ID])?;
            tx.execute(
                "INSERT INTO dummy (id, description) VALUES (?1, ?2)",
                params![DEMO_ROW_ID, DEMO_ROW_DESCRIPTION],
            )?;
            let rows = select_all(&tx)?;
            tx.commit()?;
            Ok(rows)
        })
        .await
    }

    async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, ApiError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
    }
}

fn select_all(conn: &Connection) -> Result<Vec<DemoRow>, ApiError> {
    let mut stmt = conn.prepare("SELECT id, description FROM dummy ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(DemoRow {
                id: row.get(0)?,
                description: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
