// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Video identifier absent or empty
    #[error("video_id parameter is missing")]
    MissingVideoId,

    /// No credential configured for the remote provider
    #[error("YouTube API key is required. Set YTSTATS_API_KEY environment variable or use --api-key flag")]
    MissingCredential,

    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Provider client could not be constructed
    #[error("Error creating YouTube service: {0}")]
    ProviderUnavailable(String),

    /// Provider answered with zero matching results
    #[error("No video found with ID: {0}")]
    VideoNotFound(String),

    /// Transport failure or error status from the provider
    #[error("Error fetching video stats: {0}")]
    Upstream(String),

    /// Serialization of a fixed output shape failed
    #[error("Failed to render output: {0}")]
    Render(String),
}

/// Error class used by the front ends to pick an exit path or status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Configuration,
    Upstream,
    Render,
}

impl DomainError {
    /// Classify this error into the taxonomy shared by the CLI and HTTP surfaces
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::MissingVideoId => ErrorKind::Input,
            DomainError::MissingCredential | DomainError::Config(_) => ErrorKind::Configuration,
            DomainError::ProviderUnavailable(_)
            | DomainError::VideoNotFound(_)
            | DomainError::Upstream(_) => ErrorKind::Upstream,
            DomainError::Render(_) => ErrorKind::Render,
        }
    }
}
