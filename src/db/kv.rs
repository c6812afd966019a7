//! Named storage slots.
//!
//! A slot holds one opaque string under a key. The persistence adapter keeps
//! the whole entry set in a single slot.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait KeyValueStore {
    /// Read the slot content, `None` if the key was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite the slot content.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Drop the slot; missing keys are ignored.
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All keys currently holding a value, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Slots kept in the `kv_slots` table of a SQLite database.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Open (or create) the database at `path` and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv_slots WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM kv_slots ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

/// Slots kept in a `HashMap`; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    slots: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.slots.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.slots.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
