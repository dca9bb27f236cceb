//! sitemap-pages CLI
//!
//! Fetches the configured listing and writes the per-locale page snapshot.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sitemap_pages::{
    error::Result,
    models::Config,
    pipeline,
    storage::LocalStorage,
    utils::http::ReqwestTransport,
};

/// sitemap-pages - per-locale sitemap page sets from a paginated listing API
#[derive(Parser, Debug)]
#[command(name = "sitemap-pages", version, about = "Sitemap page-set builder")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all pages and write the snapshot
    Fetch {
        /// Directory for pages.json
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;
    log::info!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Fetch { output } => {
            let transport = Arc::new(ReqwestTransport::from_config(&config.fetch)?);
            let storage = LocalStorage::new(&output);

            let summary = pipeline::run_fetch(&config, transport, &storage).await?;
            log::info!(
                "Fetch complete: {} pages across {} locales",
                summary.page_count,
                summary.locale_count
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} API, {} locales)",
                config.api.kind,
                config.locales.len()
            );
        }
    }

    Ok(())
}
