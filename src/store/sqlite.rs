//! SQLite record store - one `records` table, records kept as JSON bodies.
//!
//! rusqlite is blocking, so every call runs on tokio's blocking pool.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::{RecordStore, StoreError};
use crate::record::{Record, RecordId, Stored};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        collection TEXT NOT NULL,
        name TEXT NOT NULL,
        body TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_records_collection_name ON records(collection, name);
";

/// SQLite-backed record store. Clone-friendly via Arc.
#[derive(Clone)]
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::with_schema(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::with_schema(conn)
    }

    fn with_schema(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| StoreError::LockPoisoned(operation))?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Storage(format!("{operation} task failed: {e}")))?
    }
}

fn decode<R: Record>(id: i64, body: &str) -> Result<Stored<R>, StoreError> {
    Ok(Stored {
        id: RecordId(id as u64),
        record: serde_json::from_str(body)?,
    })
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn insert<R: Record>(&self, record: &R) -> Result<Stored<R>, StoreError> {
        let body = serde_json::to_string(record)?;
        let name = record.name().to_string();
        let id = self
            .with_conn("insert", move |conn| {
                conn.execute(
                    "INSERT INTO records (collection, name, body) VALUES (?1, ?2, ?3)",
                    params![R::COLLECTION, name, body],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        Ok(Stored {
            id: RecordId(id as u64),
            record: record.clone(),
        })
    }

    async fn find_one_by_name<R: Record>(
        &self,
        name: &str,
    ) -> Result<Option<Stored<R>>, StoreError> {
        let name = name.to_string();
        let row = self
            .with_conn("find_one_by_name", move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT id, body FROM records
                         WHERE collection = ?1 AND name = ?2
                         ORDER BY id LIMIT 1",
                        params![R::COLLECTION, name],
                        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
                    )
                    .optional()?)
            })
            .await?;

        row.map(|(id, body)| decode(id, &body)).transpose()
    }

    async fn find_all<R: Record>(&self) -> Result<Vec<Stored<R>>, StoreError> {
        let rows = self
            .with_conn("find_all", |conn| {
                let mut stmt = conn
                    .prepare("SELECT id, body FROM records WHERE collection = ?1 ORDER BY id")?;
                let rows = stmt
                    .query_map(params![R::COLLECTION], |row| {
                        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await?;

        rows.iter().map(|(id, body)| decode(*id, body)).collect()
    }

    async fn save<R: Record>(
        &self,
        id: Option<RecordId>,
        record: &R,
    ) -> Result<Stored<R>, StoreError> {
        let body = serde_json::to_string(record)?;
        let name = record.name().to_string();
        let id = self
            .with_conn("save", move |conn| {
                conn.execute(
                    "INSERT INTO records (id, collection, name, body) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name, body = excluded.body",
                    params![id.map(|id| id.0 as i64), R::COLLECTION, name, body],
                )?;
                Ok(match id {
                    Some(id) => id,
                    None => RecordId(conn.last_insert_rowid() as u64),
                })
            })
            .await?;

        Ok(Stored {
            id,
            record: record.clone(),
        })
    }
}
