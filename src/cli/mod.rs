//! CLI module for yt-stats
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::ConfigOverrides;

pub mod args;
pub mod commands;

/// yt-stats - Fetch and display YouTube video statistics
///
/// A CLI tool and API server for fetching YouTube video statistics.
#[derive(Parser, Debug)]
#[command(name = "yt-stats")]
#[command(about = "YouTube Stats - Fetch and display YouTube video statistics")]
#[command(disable_version_flag = true)]
#[command(after_help = "Examples:\n  yt-stats serve\n  yt-stats get dQw4w9WgXcQ\n  yt-stats get VIDEO_ID --format json\n  yt-stats get VIDEO_ID --fields views,likes")]
pub struct Cli {
    /// Config file (default is $HOME/.yt-stats.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// YouTube Data API key
    #[arg(long, env = "YTSTATS_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API server port
    #[arg(long, env = "YTSTATS_PORT", global = true)]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "YTSTATS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// YouTube Data API root URL
    #[arg(long, env = "YTSTATS_API_BASE_URL", global = true, hide = true)]
    pub api_base_url: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line or through the environment
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            api_key: self.api_key.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            log_json: self.log_json,
            api_base_url: self.api_base_url.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get statistics for a YouTube video
    Get(args::GetArgs),
    /// Start the HTTP API server
    Serve(args::ServeArgs),
    /// Print the version number
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults() {
        let cli = Cli::try_parse_from(["yt-stats", "get", "abc123"]).unwrap();
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.video_id, "abc123");
                assert_eq!(args.format, "table");
                assert_eq!(args.fields, vec!["views", "likes", "comments"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_get_with_flags() {
        let cli = Cli::try_parse_from([
            "yt-stats", "get", "abc123", "-f", "yaml", "--fields", "favorites,viewCount",
            "--port", "9000",
        ])
        .unwrap();

        assert_eq!(cli.port, Some(9000));
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.format, "yaml");
                assert_eq!(args.fields, vec!["favorites", "viewCount"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_get_requires_video_id() {
        assert!(Cli::try_parse_from(["yt-stats", "get"]).is_err());
    }

    #[test]
    fn test_overrides_carry_cli_values() {
        let cli = Cli::try_parse_from([
            "yt-stats", "--api-key", "k", "--log-level", "debug", "--log-json", "serve",
        ])
        .unwrap();
        let overrides = cli.config_overrides();

        assert_eq!(overrides.api_key.as_deref(), Some("k"));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert!(overrides.log_json);
        assert!(matches!(cli.command, Commands::Serve(_)));
    }
}
