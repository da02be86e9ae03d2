//! Subcommands and the startup context they share.

pub mod calendar;
pub mod config;
pub mod migrate;
pub mod task;

use std::path::PathBuf;

use lockedin_core::storage::data_dir;
use lockedin_core::{Config, SchemaMigrator, Store};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Resolved configuration and file locations for one invocation.
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    db_override: Option<PathBuf>,
}

impl Context {
    pub fn load(
        config_path: Option<PathBuf>,
        db_override: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = match config_path {
            Some(path) => path,
            None => data_dir()?.join("config.toml"),
        };
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config,
            config_path,
            db_override,
        })
    }

    pub fn db_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if let Some(path) = self.db_override.clone().or_else(|| self.config.database_path()) {
            return Ok(path);
        }
        Ok(data_dir()?.join("tasks.db"))
    }

    /// Open the store without touching its schema.
    pub fn open_unmigrated(&self) -> Result<Store, Box<dyn std::error::Error>> {
        Ok(Store::open(self.db_path()?)?)
    }

    /// Open the store and bring it to the latest schema.
    ///
    /// A migration failure is returned as-is so `main` can halt on it.
    pub fn open_store(&self) -> Result<Store, Box<dyn std::error::Error>> {
        let mut store = self.open_unmigrated()?;
        SchemaMigrator::new().run(&mut store)?;
        Ok(store)
    }
}
