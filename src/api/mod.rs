//! HTTP API: `GET /stats?video_id=<id>`

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::app::StatsInteractor;
use crate::domain::errors::{DomainError, ErrorKind};
use crate::domain::model::StatisticsCounters;

#[derive(Clone)]
pub struct AppState {
    stats: Arc<StatsInteractor>,
}

impl AppState {
    pub fn new(stats: Arc<StatsInteractor>) -> Self {
        Self { stats }
    }
}

/// Build the router. Methods other than GET on `/stats` get 405 from axum.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/stats", get(handle_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on port {}", port);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// First `video_id` value in the query; later repeats are ignored
fn first_video_id(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "video_id")
        .map(|(_, value)| value)
        .filter(|id| !id.trim().is_empty())
}

async fn handle_stats(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<StatisticsCounters>, ApiError> {
    let video_id = first_video_id(params).ok_or(ApiError::MissingVideoId)?;

    let stats = state.stats.fetch(&video_id).await?;
    Ok(Json(stats.counters))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("video_id parameter is missing")]
    MissingVideoId,
    #[error("failed to retrieve video statistics")]
    Retrieval(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.kind() {
            ErrorKind::Input => ApiError::MissingVideoId,
            _ => ApiError::Retrieval(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingVideoId => {
                warn!("Rejected stats request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Retrieval(cause) => {
                error!("{}: {}", self, cause);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
