// YouTube Data API adapter - Video statistics over the v3 REST API

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Default API root for the YouTube Data API v3
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API adapter
pub struct YouTubeApiAdapter {
    client: Client,
    base_url: String,
}

impl YouTubeApiAdapter {
    /// Create new adapter against the given API root
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(concat!("yt-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ProviderUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url)
    }
}

#[async_trait]
impl StatsProviderPort for YouTubeApiAdapter {
    async fn fetch(
        &self,
        video_id: &str,
        credential: &str,
    ) -> Result<Vec<VideoStatistics>, DomainError> {
        debug!("Requesting statistics,snippet for video {}", video_id);

        let response = self
            .client
            .get(self.videos_url())
            .query(&[
                ("part", "statistics,snippet"),
                ("id", video_id),
                ("key", credential),
            ])
            .send()
            .await
            .map_err(upstream_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DomainError::Upstream(format!(
                "provider returned {}: {}",
                status,
                message.trim()
            )));
        }

        let list: VideoListResponse = response
            .json()
            .await
            .map_err(|e| {
                DomainError::Upstream(format!(
                    "invalid provider response: {}",
                    e.without_url()
                ))
            })?;

        debug!("Provider returned {} item(s)", list.items.len());
        Ok(list.items.into_iter().map(VideoItem::into_statistics).collect())
    }
}

/// The credential travels in the query string, so the URL never goes into errors
fn upstream_error(e: reqwest::Error) -> DomainError {
    DomainError::Upstream(e.without_url().to_string())
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Option<Snippet>,
    #[serde(default)]
    statistics: Option<Statistics>,
}

impl VideoItem {
    fn into_statistics(self) -> VideoStatistics {
        let title = self.snippet.map(|s| s.title).unwrap_or_default();
        let stats = self.statistics.unwrap_or_default();
        VideoStatistics::new(
            self.id,
            title,
            StatisticsCounters {
                view_count: stats.view_count,
                like_count: stats.like_count,
                comment_count: stats.comment_count,
                favorite_count: stats.favorite_count,
            },
        )
    }
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    #[serde(default, deserialize_with = "count_from_string")]
    view_count: u64,
    #[serde(default, deserialize_with = "count_from_string")]
    like_count: u64,
    #[serde(default, deserialize_with = "count_from_string")]
    comment_count: u64,
    #[serde(default, deserialize_with = "count_from_string")]
    favorite_count: u64,
}

/// Counters arrive as decimal strings; absent or null means zero
fn count_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Number(u64),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Number(n)) => Ok(n),
        Some(Count::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
