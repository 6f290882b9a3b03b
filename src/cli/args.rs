//! Command-line argument definitions

use clap::Args;

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// YouTube video ID
    pub video_id: String,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Fields to display in the table (views, likes, comments, favorites)
    #[arg(long, value_delimiter = ',', default_value = "views,likes,comments")]
    pub fields: Vec<String>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {}
