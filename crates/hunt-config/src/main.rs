//! Hunt config loader — entry point.
//!
//! Ensures `<root>/hunt/config.json` exists and is valid, then logs a summary
//! of the live settings.  The hunt scheduler embeds the same
//! [`ConfigStore`] directly; this binary exists so operators can generate or
//! check a config file without starting the game server.
//!
//! # Usage
//!
//! ```text
//! hunt-config [OPTIONS]
//!
//! Options:
//!   --root      <DIR>    Config root directory [default: config]
//!   --log-level <LEVEL>  Log level when RUST_LOG is unset [default: info]
//! ```
//!
//! `--root` can also be set with `HUNT_CONFIG_ROOT`.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ ConfigStore::new(FsPersistence, TracingLog)
//!  └─ ConfigStore::init()   -- read, or write defaults
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hunt_config::application::config_store::ConfigStore;
use hunt_config::infrastructure::logging::TracingLog;
use hunt_config::infrastructure::storage::fs::FsPersistence;

/// Loads or generates the hunt configuration.
#[derive(Debug, Parser)]
#[command(
    name = "hunt-config",
    about = "Loads or generates the hunt config.json",
    version
)]
struct Cli {
    /// Directory holding the `hunt/` config namespace.
    #[arg(long, default_value = "config", env = "HUNT_CONFIG_ROOT")]
    root: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&cli.log_level))?,
        )
        .init();

    let persistence = Arc::new(FsPersistence::new(&cli.root));
    info!(root = %persistence.root().display(), "hunt config loader starting");
    let mut store = ConfigStore::new(persistence, Arc::new(TracingLog));
    store.init().await;

    info!(
        outcome = ?store.outcome(),
        individual_hunts = store.individual_hunts(),
        hunt_duration_minutes = store.hunt_duration(),
        hunt_amount = store.hunt_amount(),
        custom_prices = store.custom_prices().len(),
        blacklisted = store.blacklist().len(),
        "hunt config ready"
    );
    Ok(())
}
