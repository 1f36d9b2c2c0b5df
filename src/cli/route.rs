//! CLI route: run context and the single command dispatch table.

use crate::config::{ConfigLoader, WriterConfig};
use crate::error::ApiError;
use crate::orchestrator::ArticleGenerator;
use crate::quality;
use crate::types::{ArticleType, GenerationRequest};
use std::path::PathBuf;
use tracing::info;

use crate::cli::output::{format_generation_output, format_status_text};
use crate::cli::parse::Commands;

/// Runtime context for CLI execution: loaded configuration and the generator.
pub struct RunContext {
    config: WriterConfig,
    generator: ArticleGenerator,
}

impl RunContext {
    /// Load configuration and build the generator.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: WriterConfig) -> Self {
        let generator = ArticleGenerator::new(&config);
        Self { config, generator }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                keyword,
                title,
                article_type,
                quality,
            } => self.handle_generate(keyword, title, article_type.as_deref(), *quality),
            Commands::Status { format } => self.handle_status(format),
        }
    }

    fn handle_generate(
        &self,
        keyword: &str,
        title: &str,
        article_type: Option<&str>,
        with_quality: bool,
    ) -> Result<String, ApiError> {
        let request =
            GenerationRequest::new(keyword, title, ArticleType::parse_lenient(article_type))?;

        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        let outcome = rt.block_on(self.generator.generate(&request));
        info!(source = ?outcome.source, "Article ready");

        let report = with_quality
            .then(|| quality::analyze(&outcome.payload.content, request.primary_keyword()));
        format_generation_output(&outcome, report.as_ref())
    }

    fn handle_status(&self, format: &str) -> Result<String, ApiError> {
        let status = self.generator.provider_status();
        match format {
            "json" => serde_json::to_string_pretty(&status)
                .map_err(|e| ApiError::ConfigError(format!("Failed to serialize status: {}", e))),
            "text" => Ok(format_status_text(&status)),
            other => Err(ApiError::InvalidRequest(format!(
                "Unknown status format '{}', expected text or json",
                other
            ))),
        }
    }
}
