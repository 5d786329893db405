use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rusqlite::{params, OptionalExtension};
use tokio::task;

use crate::base::PreferenceStore;
use crate::data::database::ConnectionPool;

/// SQLite implementation of the PreferenceStore trait
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    pool: ConnectionPool,
}

impl SqlitePreferenceStore {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Runs a blocking database closure off the async executor
    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let conn = pool.get().context("Failed to get database connection")?;
            f(&conn)
        })
        .await
        .context("Preference database task panicked")?
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.with_connection(move |conn| {
            conn.query_row(
                "SELECT value FROM preferences WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read preference '{}'", key))
        })
        .await
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.with_connection(move |conn| {
            conn.execute(
                "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("Failed to write preference '{}'", key))?;

            debug!("Stored preference '{}' = '{}'", key, value);
            Ok(())
        })
        .await
    }
}
