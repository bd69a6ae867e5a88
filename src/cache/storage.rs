//! SQLite-based cache storage
//!
//! Responses are stored inline with a per-entry expiry timestamp.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::CacheError;

/// Schema version; a mismatch on open rebuilds the database
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, CacheError>;

/// SQLite-backed cache storage
pub struct CacheStorage {
    conn: Connection,
}

/// Aggregate cache statistics for `folio cache status`
#[derive(Debug, Default)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub total_size_bytes: u64,
    pub oldest_entry: Option<i64>,
    pub newest_entry: Option<i64>,
}

impl CacheStorage {
    /// Open or create cache storage at the default XDG cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir)
    }

    /// Get the cache directory path (~/.cache/folio on Linux/macOS)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("folio"))
    }

    /// Open cache storage at a specific directory (for testing)
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join("cache.db");
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove stale cache: {}", e)))?;
            return Self::open_at(cache_dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS responses (
                cache_key TEXT PRIMARY KEY NOT NULL,
                endpoint TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL,
                body_bytes INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expires_at ON responses(expires_at);
            CREATE INDEX IF NOT EXISTS idx_endpoint ON responses(endpoint);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn })
    }

    /// Get cached data if valid (not expired)
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Utc::now().timestamp();

        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM responses
                 WHERE cache_key = ?1 AND expires_at > ?2",
                params![key, now],
                |row| row.get(0),
            )
            .optional()?;

        Ok(data.map(String::into_bytes))
    }

    /// Store data with the given TTL, replacing any existing entry
    pub fn put(&self, key: &str, data: &[u8], endpoint: &str, ttl: Duration) -> Result<()> {
        let now = Utc::now().timestamp();
        let expires_at = now + ttl.as_secs() as i64;
        let text = std::str::from_utf8(data)
            .map_err(|e| CacheError::Io(format!("Non-UTF8 cache payload: {}", e)))?;

        self.conn.execute(
            "INSERT OR REPLACE INTO responses
             (cache_key, endpoint, body, created_at, expires_at, body_bytes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![key, endpoint, text, now, expires_at, data.len() as i64],
        )?;

        Ok(())
    }

    /// Remove all entries
    pub fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM responses", [])?;
        Ok(removed)
    }

    /// Remove expired entries only
    pub fn purge_expired(&self) -> Result<usize> {
        let now = Utc::now().timestamp();
        let removed = self
            .conn
            .execute("DELETE FROM responses WHERE expires_at <= ?1", params![now])?;
        Ok(removed)
    }

    /// Collect aggregate statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let now = Utc::now().timestamp();

        let (total, size, oldest, newest): (usize, Option<i64>, Option<i64>, Option<i64>) =
            self.conn.query_row(
                "SELECT COUNT(*), SUM(body_bytes), MIN(created_at), MAX(created_at)
                 FROM responses",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )?;

        let valid: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM responses WHERE expires_at > ?1",
            params![now],
            |row| row.get(0),
        )?;

        Ok(CacheStats {
            total_entries: total,
            valid_entries: valid,
            expired_entries: total - valid,
            total_size_bytes: size.unwrap_or(0) as u64,
            oldest_entry: oldest,
            newest_entry: newest,
        })
    }
}
