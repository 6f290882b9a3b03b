//! yt-stats library
//!
//! Fetches public statistics for a single YouTube video and renders them as a
//! terminal report (table, JSON, YAML) or serves them over HTTP.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::{DomainError, ErrorKind};
pub use domain::model::{FieldSelection, OutputFormat, StatField, StatisticsCounters, VideoStatistics};
pub use ports::StatsProviderPort;
