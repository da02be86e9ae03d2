use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lockedin_core::CoreError;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "lockedin", version, about = "LockedIn tasks and calendar")]
struct Cli {
    /// Task database file (overrides config `database_path`)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Configuration file (defaults to ~/.local/share/lockedin/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate {
        /// Only report the recorded version and pending migrations
        #[arg(long)]
        status: bool,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Month and day calendar views
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("lockedin_core={default_level},lockedin={default_level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let ctx = match Context::load(cli.config, cli.db) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&ctx.config.log_level);

    let result = match cli.command {
        Commands::Migrate { status } => commands::migrate::run(&ctx, status),
        Commands::Task { action } => commands::task::run(&ctx, action),
        Commands::Calendar { action } => commands::calendar::run(&ctx, action),
        Commands::Config { action } => commands::config::run(&ctx, action),
    };

    if let Err(e) = result {
        let fatal = e
            .downcast_ref::<CoreError>()
            .is_some_and(CoreError::is_fatal);
        if fatal {
            tracing::error!(error = %e, "aborting: store is unusable");
            eprintln!("fatal: {e}");
            std::process::exit(2);
        }
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
