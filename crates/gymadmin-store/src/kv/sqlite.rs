//! SQLite key-value backend

use gymadmin_core::storage::KvStorage;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;

/// Key-value storage over the `kv_entries` table
#[derive(Debug)]
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Open (creating if needed) and migrate the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| crate::errors::io_error("create_data_dir", e))?;
            }
        }
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Migrate and wrap an existing connection
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key")
            .map_err(from_rusqlite)?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn write_all(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        for (key, value) in entries {
            tx.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value, now],
            )
            .map_err(|e| from_rusqlite(e).with_collection(*key))?;
        }
        tx.commit().map_err(from_rusqlite)
    }
}

impl KvStorage for SqliteKv {
    fn get(&self, key: &str) -> gymadmin_core::Result<Option<String>> {
        Ok(self.read(key)?)
    }

    fn write_batch(&mut self, entries: &[(&str, String)]) -> gymadmin_core::Result<()> {
        Ok(self.write_all(entries)?)
    }
}
