use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::{Connection, Error as SqliteError};

/// Database migration manager that brings older preference files up to date
pub struct MigrationManager<'a> {
    connection: &'a Connection,
}

impl<'a> MigrationManager<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Run all necessary migrations to update the database schema
    pub fn run_migrations(&self) -> Result<()> {
        debug!("Running database migrations");

        self.create_migrations_table()?;
        self.migrate_add_updated_at_to_preferences()?;

        debug!("Database migrations completed");
        Ok(())
    }

    fn create_migrations_table(&self) -> Result<()> {
        self.connection
            .execute(
                "CREATE TABLE IF NOT EXISTS migrations (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    applied_at TEXT NOT NULL
                )",
                [],
            )
            .context("Failed to create migrations table")?;

        Ok(())
    }

    fn is_migration_applied(&self, name: &str) -> Result<bool> {
        let count: i64 = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM migrations WHERE name = ?",
                [name],
                |row| row.get(0),
            )
            .context("Failed to check if migration has been applied")?;

        Ok(count > 0)
    }

    fn record_migration(&self, name: &str) -> Result<()> {
        debug!("Recording migration '{}' as applied", name);

        self.connection
            .execute(
                "INSERT INTO migrations (name, applied_at) VALUES (?, datetime('now'))",
                [name],
            )
            .context("Failed to record migration")?;

        Ok(())
    }

    fn column_exists(&self, table: &str, column: &str) -> Result<bool> {
        match self.connection.query_row(
            "SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2",
            [table, column],
            |_| Ok(true),
        ) {
            Ok(_) => Ok(true),
            Err(SqliteError::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to check if {}.{} exists", table, column)),
        }
    }

    /// Migration: add updated_at to preference files written before it existed
    fn migrate_add_updated_at_to_preferences(&self) -> Result<()> {
        const MIGRATION_NAME: &str = "add_updated_at_to_preferences";

        if self.is_migration_applied(MIGRATION_NAME)? {
            debug!("Migration '{}' already applied, skipping", MIGRATION_NAME);
            return Ok(());
        }

        if !self.column_exists("preferences", "updated_at")? {
            info!("Running migration: {}", MIGRATION_NAME);
            match self.connection.execute(
                "ALTER TABLE preferences ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                [],
            ) {
                Ok(_) => info!("Added updated_at column to preferences table"),
                Err(e) if e.to_string().contains("duplicate column name") => {
                    debug!("Column 'updated_at' already exists (concurrent addition detected)");
                }
                Err(e) => {
                    return Err(e).context("Failed to add updated_at column to preferences table")
                }
            }
        }

        self.record_migration(MIGRATION_NAME)?;
        Ok(())
    }
}
