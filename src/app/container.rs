use std::sync::Arc;

use crate::adapters::YouTubeApiAdapter;
use crate::app::stats_interactor::StatsInteractor;
use crate::config_initialization::AppConfig;
use crate::domain::errors::DomainError;
use crate::ports::StatsProviderPort;

pub trait AppContainer: Send + Sync {
    fn stats_interactor(&self) -> Arc<StatsInteractor>;
}

pub struct DefaultAppContainer {
    stats_interactor: Arc<StatsInteractor>,
}

impl DefaultAppContainer {
    /// Wire the YouTube adapter with the configured credential.
    ///
    /// Fails with `MissingCredential` before anything is constructed.
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let credential = config.require_api_key()?.to_string();
        let provider = Arc::new(YouTubeApiAdapter::new(&config.api_base_url)?);
        Ok(Self::with_provider(provider, credential))
    }

    /// Wire an arbitrary provider implementation
    pub fn with_provider(provider: Arc<dyn StatsProviderPort>, credential: String) -> Self {
        Self {
            stats_interactor: Arc::new(StatsInteractor::new(provider, credential)),
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn stats_interactor(&self) -> Arc<StatsInteractor> {
        Arc::clone(&self.stats_interactor)
    }
}
