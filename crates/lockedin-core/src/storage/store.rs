//! Explicit store handle.
//!
//! One `Store` is opened at startup and passed by reference to the
//! [`SchemaMigrator`](super::SchemaMigrator) and the
//! [`TaskRepository`](crate::TaskRepository). Nothing looks it up globally.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info};

use super::data_dir;
use crate::error::{CoreError, DatabaseError, Result};

/// SQLite-backed task store.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
    initialized: bool,
}

impl Store {
    /// Open the store at `~/.local/share/lockedin/tasks.db`.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open_default() -> Result<Self> {
        let path = data_dir()?.join("tasks.db");
        Self::open(path)
    }

    /// Open (or create) a store file, creating parent directories.
    ///
    /// The store is not usable by the repository until migrations run.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        info!(path = %path.display(), journal_mode = %mode, "opened task store");

        Ok(Self {
            conn,
            path: Some(path),
            initialized: false,
        })
    }

    /// Open an in-memory store (for tests and dry runs).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        debug!("opened in-memory task store");
        Ok(Self {
            conn,
            path: None,
            initialized: false,
        })
    }

    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// File backing this store, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the schema migrator has completed on this handle.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Connection for repository access, refused until migrations completed.
    pub fn require_initialized(&self) -> Result<&Connection> {
        if self.initialized {
            Ok(&self.conn)
        } else {
            Err(CoreError::NotInitialized)
        }
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}
