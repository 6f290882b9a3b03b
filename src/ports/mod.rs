// Ports - Interface definitions (contracts)

use crate::domain::errors::*;
use crate::domain::model::*;
use async_trait::async_trait;

/// Port for the remote video metadata provider
#[async_trait]
pub trait StatsProviderPort: Send + Sync {
    /// Look up a video by identifier, requesting statistics and snippet data.
    ///
    /// Returns every matching result; an empty list means the identifier is unknown.
    async fn fetch(&self, video_id: &str, credential: &str)
        -> Result<Vec<VideoStatistics>, DomainError>;
}
