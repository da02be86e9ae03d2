//! Database schema migrations for lockedin.
//!
//! Migrations are versioned and applied when the host starts. The
//! `schema_version` table holds one row per applied version; the highest row
//! is the current version. Shipped migrations are append-only: a new one gets
//! the next version number and existing entries never change.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, error, info};

use super::store::Store;
use crate::error::{DatabaseError, Result};

/// One versioned structural change.
///
/// `sql` must be safe to run against a store that already has the change
/// (`IF NOT EXISTS` everywhere), so re-running the pipeline is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// Migrations shipped with this build, ascending by version.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "tasks table with priority check and lookup indexes",
    sql: "CREATE TABLE IF NOT EXISTS tasks (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT DEFAULT '',
            due_date    TEXT,
            priority    TEXT DEFAULT 'medium' CHECK(priority IN ('low', 'medium', 'high', 'urgent')),
            tags        TEXT DEFAULT '',
            completed   INTEGER DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
        CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks(priority);
        CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);",
}];

/// Brings a store up to the latest schema version.
#[derive(Debug, Clone)]
pub struct SchemaMigrator {
    migrations: Vec<Migration>,
}

impl Default for SchemaMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaMigrator {
    /// Migrator over the shipped [`MIGRATIONS`].
    pub fn new() -> Self {
        Self {
            migrations: MIGRATIONS.to_vec(),
        }
    }

    /// Migrator over a custom list.
    ///
    /// # Errors
    /// Returns [`DatabaseError::InvalidMigrationOrder`] unless the versions are
    /// exactly `1, 2, 3, ...` in order.
    pub fn with_migrations(migrations: Vec<Migration>) -> Result<Self> {
        for (index, migration) in migrations.iter().enumerate() {
            let expected = index as u32 + 1;
            if migration.version != expected {
                return Err(DatabaseError::InvalidMigrationOrder {
                    expected,
                    found: migration.version,
                }
                .into());
            }
        }
        Ok(Self { migrations })
    }

    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    /// Version the store ends at once every migration is applied.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Apply all pending migrations, then mark the store initialized.
    ///
    /// Returns the version the store is at afterwards.
    ///
    /// # Errors
    /// Returns [`DatabaseError::MigrationFailed`] for the first migration that
    /// fails. That migration is rolled back, later ones are not attempted and
    /// the store stays uninitialized. Callers must treat this as fatal.
    pub fn run(&self, store: &mut Store) -> Result<u32> {
        let conn = store.conn();
        create_schema_version_table(conn).map_err(|e| DatabaseError::MigrationFailed {
            version: 0,
            message: e.to_string(),
        })?;

        let current = read_version(conn)?;
        debug!(current, latest = self.latest_version(), "checking schema version");

        let mut version = current;
        for migration in self.migrations.iter().filter(|m| m.version > current) {
            if let Err(e) = apply(conn, migration) {
                error!(version = migration.version, error = %e, "migration failed");
                return Err(DatabaseError::MigrationFailed {
                    version: migration.version,
                    message: e.to_string(),
                }
                .into());
            }
            info!(
                version = migration.version,
                description = migration.description,
                "migration applied"
            );
            version = migration.version;
        }

        store.mark_initialized();
        Ok(version)
    }

    /// Highest recorded version, 0 for a blank store.
    pub fn current_version(store: &Store) -> Result<u32> {
        let conn = store.conn();
        if !has_schema_version_table(conn)? {
            return Ok(0);
        }
        Ok(read_version(conn)?)
    }

    /// Migrations that `run` would apply.
    pub fn pending(&self, store: &Store) -> Result<Vec<&Migration>> {
        let current = Self::current_version(store)?;
        Ok(self
            .migrations
            .iter()
            .filter(|m| m.version > current)
            .collect())
    }
}

/// Create the schema_version table if it doesn't exist.
fn create_schema_version_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

fn has_schema_version_table(conn: &Connection) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
        [],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

fn read_version(conn: &Connection) -> Result<u32, DatabaseError> {
    let version: Option<u32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

/// Structural change and version record commit together or not at all.
fn apply(conn: &Connection, migration: &Migration) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        params![migration.version],
    )?;
    tx.commit()
}
