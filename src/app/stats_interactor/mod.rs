// Stats interactor - Orchestrates video statistics retrieval

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Interactor for the statistics retrieval use case
pub struct StatsInteractor {
    provider: Arc<dyn StatsProviderPort>,
    credential: String,
}

impl StatsInteractor {
    /// Create new stats interactor with injected provider and credential
    pub fn new(provider: Arc<dyn StatsProviderPort>, credential: impl Into<String>) -> Self {
        Self {
            provider,
            credential: credential.into(),
        }
    }

    /// Fetch statistics for one video.
    ///
    /// An empty identifier is rejected before the provider is called.
    pub async fn fetch(&self, video_id: &str) -> Result<VideoStatistics, DomainError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(DomainError::MissingVideoId);
        }

        debug!("Fetching statistics for video {}", video_id);
        let mut items = self.provider.fetch(video_id, &self.credential).await?;

        if items.is_empty() {
            debug!("Provider returned no results for {}", video_id);
            return Err(DomainError::VideoNotFound(video_id.to_string()));
        }

        Ok(items.swap_remove(0))
    }
}
