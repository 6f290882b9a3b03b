//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::api::{self, AppState};
use crate::app::{AppContainer, DefaultAppContainer, StatsInteractor};
use crate::cli::args::GetArgs;
use crate::config_initialization::AppConfig;
use crate::domain::model::{FieldSelection, OutputFormat};
use crate::output;

/// Execute the get command
pub async fn get(args: &GetArgs, config: &AppConfig) -> Result<()> {
    let container = DefaultAppContainer::new(config)?;
    let report = render_stats(args, &container.stats_interactor()).await?;
    print!("{}", report);
    Ok(())
}

/// Fetch statistics for `args.video_id` and render them as requested
pub async fn render_stats(args: &GetArgs, stats: &StatsInteractor) -> Result<String> {
    let format = OutputFormat::parse_lenient(&args.format);
    let fields = FieldSelection::new(args.fields.iter().map(|f| f.trim()));

    let video = stats.fetch(&args.video_id).await?;
    let report = output::render(&video, format, &fields)?;
    Ok(report)
}

/// Execute the serve command
pub async fn serve(config: &AppConfig) -> Result<()> {
    let container = DefaultAppContainer::new(config)?;
    let state = AppState::new(container.stats_interactor());

    api::serve(state, config.port)
        .await
        .with_context(|| format!("API server on port {} failed", config.port))?;

    info!("Server stopped");
    Ok(())
}

/// Text printed by the version command
pub fn version_text() -> String {
    format!(
        "yt-stats version {}\n  commit: {}\n  built:  {}\n",
        env!("CARGO_PKG_VERSION"),
        option_env!("YTSTATS_GIT_COMMIT").unwrap_or("dev"),
        option_env!("YTSTATS_BUILD_DATE").unwrap_or("unknown"),
    )
}
