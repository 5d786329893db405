use std::path::Path;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::{debug, info};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

use crate::data::migration::MigrationManager;

pub type ConnectionPool = Arc<Pool<SqliteConnectionManager>>;

/// Opens (creating if needed) the preference database at `db_path`
pub fn init_database(db_path: &Path) -> Result<ConnectionPool> {
    info!("Opening preference database at {}", db_path.display());

    let manager = SqliteConnectionManager::file(db_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    let pool = Pool::new(manager)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    prepare_schema(&pool)?;
    Ok(Arc::new(pool))
}

/// Builds a throwaway in-memory database
///
/// Every connection to `:memory:` is a separate database, so the pool is
/// capped at a single connection.
pub fn init_memory_database() -> Result<ConnectionPool> {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create in-memory database")?;

    prepare_schema(&pool)?;
    Ok(Arc::new(pool))
}

fn prepare_schema(pool: &Pool<SqliteConnectionManager>) -> Result<()> {
    let conn = pool.get().context("Failed to get database connection")?;

    debug!("Applying preference schema");
    conn.execute_batch(include_str!("../../data/schema.sql"))
        .context("Failed to apply database schema")?;

    MigrationManager::new(&conn).run_migrations()
}
