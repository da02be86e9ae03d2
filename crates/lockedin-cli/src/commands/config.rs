use clap::Subcommand;

use super::{CliResult, Context};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "calendar.max_tasks_per_cell", "log_level")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Show all config values
    Show,
    /// Reset config to defaults
    Reset,
}

pub fn run(ctx: &Context, action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key } => match ctx.config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown config key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            let mut config = ctx.config.clone();
            config.set(&key, &value)?;
            config.save_to(&ctx.config_path)?;
            println!("ok");
        }
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        }
        ConfigAction::Reset => {
            lockedin_core::Config::default().save_to(&ctx.config_path)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
