//! yt-stats
//!
//! A command-line tool and API server for fetching YouTube video statistics.
//!
//! # Usage
//!
//! ```bash
//! yt-stats get dQw4w9WgXcQ
//! yt-stats get dQw4w9WgXcQ --format json
//! yt-stats get dQw4w9WgXcQ --fields views,likes,favorites
//! YTSTATS_API_KEY=... yt-stats serve --port 8998
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use yt_stats::cli::{commands, Cli, Commands};
use yt_stats::config_initialization::{home_dir, initialize_configuration_hierarchy};
use yt_stats::utils::logging::{self, LoggingConfig};

/// Main entry point for the yt-stats CLI
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = initialize_configuration_hierarchy(&cli.config_overrides(), home_dir().as_deref())?;

    // Initialize logging
    let (logging_config, level_error) =
        LoggingConfig::from_level_name(&config.log_level, config.log_json);
    logging::init(&logging_config);
    if let Some(e) = level_error {
        warn!("{}; using info", e);
    }
    if let Some(path) = &config.config_file {
        eprintln!("Using config file: {}", path.display());
    }

    // Execute the requested command
    match cli.command {
        Commands::Get(args) => commands::get(&args, &config).await,
        Commands::Serve(_) => commands::serve(&config).await,
        Commands::Version => {
            print!("{}", commands::version_text());
            Ok(())
        }
    }
}
