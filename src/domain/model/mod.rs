// Domain models - Core types and data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::errors::DomainError;

/// The four public counters of a video.
///
/// Serialized with the provider's PascalCase field names; this is the body
/// of a successful `GET /stats` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticsCounters {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub favorite_count: u64,
}

impl StatisticsCounters {
    /// Value of a single counter
    pub fn get(&self, field: StatField) -> u64 {
        match field {
            StatField::Views => self.view_count,
            StatField::Likes => self.like_count,
            StatField::Comments => self.comment_count,
            StatField::Favorites => self.favorite_count,
        }
    }
}

/// Statistics snapshot for one video, created fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStatistics {
    pub id: String,
    pub title: String,
    pub counters: StatisticsCounters,
}

impl VideoStatistics {
    pub fn new(id: impl Into<String>, title: impl Into<String>, counters: StatisticsCounters) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            counters,
        }
    }
}

/// Output format for the `get` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name, falling back to `Table` for anything unrecognized
    pub fn parse_lenient(format_str: &str) -> Self {
        match format_str.parse() {
            Ok(format) => format,
            Err(e) => {
                warn!("{}, falling back to table", e);
                OutputFormat::Table
            }
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(DomainError::Config(format!(
                "unknown output format '{}'. Valid formats: table, json, yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A statistic that can appear in the table report.
///
/// Variant order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatField {
    Views,
    Likes,
    Comments,
    Favorites,
}

impl StatField {
    /// Resolve a short alias (`views`) or API name (`viewCount`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "views" | "viewCount" => Some(StatField::Views),
            "likes" | "likeCount" => Some(StatField::Likes),
            "comments" | "commentCount" => Some(StatField::Comments),
            "favorites" | "favoriteCount" => Some(StatField::Favorites),
            _ => None,
        }
    }

    /// Row label in the table report
    pub fn label(&self) -> &'static str {
        match self {
            StatField::Views => "Views:",
            StatField::Likes => "Likes:",
            StatField::Comments => "Comments:",
            StatField::Favorites => "Favorites:",
        }
    }
}

/// Caller-supplied field names for the table report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    names: Vec<String>,
}

impl FieldSelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Recognized fields, deduplicated, in canonical order.
    ///
    /// Unknown names are dropped.
    pub fn resolve(&self) -> Vec<StatField> {
        let mut fields: Vec<StatField> = self
            .names
            .iter()
            .filter_map(|name| StatField::from_name(name))
            .collect();
        fields.sort();
        fields.dedup();
        fields
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::new(["views", "likes", "comments"])
    }
}
