// Adapters - External system implementations

pub mod file_config;
pub mod youtube_api;

// Re-export adapters
pub use file_config::{FileConfig, FileConfigAdapter};
pub use youtube_api::YouTubeApiAdapter;
