//! Output rendering for the `get` command
//!
//! The table honors the caller's field selection. JSON and YAML always carry
//! the full fixed key set so downstream parsers see a stable schema.

pub mod table;

use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::model::{FieldSelection, OutputFormat, VideoStatistics};

pub use table::{format_number, render_table, truncate_title};

/// Render statistics in the requested format
pub fn render(
    stats: &VideoStatistics,
    format: OutputFormat,
    fields: &FieldSelection,
) -> Result<String, DomainError> {
    match format {
        OutputFormat::Table => Ok(render_table(stats, fields)),
        OutputFormat::Json => render_json(stats),
        OutputFormat::Yaml => render_yaml(stats),
    }
}

/// JSON report; counters are decimal strings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    id: &'a str,
    title: &'a str,
    view_count: String,
    like_count: String,
    comment_count: String,
    favorite_count: String,
}

/// YAML report; counters are plain integers
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct YamlReport<'a> {
    id: &'a str,
    title: &'a str,
    view_count: u64,
    like_count: u64,
    comment_count: u64,
    favorite_count: u64,
}

pub fn render_json(stats: &VideoStatistics) -> Result<String, DomainError> {
    let c = &stats.counters;
    let report = JsonReport {
        id: &stats.id,
        title: &stats.title,
        view_count: c.view_count.to_string(),
        like_count: c.like_count.to_string(),
        comment_count: c.comment_count.to_string(),
        favorite_count: c.favorite_count.to_string(),
    };

    let mut json = serde_json::to_string_pretty(&report)
        .map_err(|e| DomainError::Render(format!("JSON serialization failed: {}", e)))?;
    json.push('\n');
    Ok(json)
}

pub fn render_yaml(stats: &VideoStatistics) -> Result<String, DomainError> {
    let c = &stats.counters;
    let report = YamlReport {
        id: &stats.id,
        title: &stats.title,
        view_count: c.view_count,
        like_count: c.like_count,
        comment_count: c.comment_count,
        favorite_count: c.favorite_count,
    };

    serde_yaml::to_string(&report)
        .map_err(|e| DomainError::Render(format!("YAML serialization failed: {}", e)))
}
