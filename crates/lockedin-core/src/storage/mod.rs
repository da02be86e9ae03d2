mod config;
pub mod migrations;
pub mod store;

pub use config::{CalendarConfig, Config, TasksConfig};
pub use migrations::{Migration, SchemaMigrator, MIGRATIONS};
pub use store::Store;

use std::path::PathBuf;

/// Returns `~/.local/share/lockedin[-dev]/` based on LOCKEDIN_ENV.
///
/// Set LOCKEDIN_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local")
        .join("share");

    let env = std::env::var("LOCKEDIN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lockedin-dev")
    } else {
        base_dir.join("lockedin")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
