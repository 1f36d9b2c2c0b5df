//! CLI parse: clap types for seo-writer. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seo-writer CLI - SEO article generation with a deterministic fallback
#[derive(Parser)]
#[command(name = "seo-writer")]
#[command(about = "Generate SEO articles through an external model or the built-in simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one article and print it as JSON
    Generate {
        /// Primary keyword the article targets
        #[arg(long)]
        keyword: String,
        /// Article title
        #[arg(long)]
        title: String,
        /// Article type (pillar or supporting; anything else means supporting)
        #[arg(long = "type")]
        article_type: Option<String>,
        /// Include a content quality report
        #[arg(long)]
        quality: bool,
    },
    /// Show provider configuration status
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
