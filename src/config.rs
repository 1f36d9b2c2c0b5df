//! Configuration System
//!
//! Process-wide, read-only settings for the generation pipeline: provider
//! credentials and selector, endpoint override, timeouts, simulator latency,
//! and logging. Layered with the `config` crate (defaults, then an optional
//! TOML file, then environment variables) and handed to the orchestrator
//! explicitly at construction.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::provider::gemini::DEFAULT_MODEL;
use crate::provider::SUPPORTED_PROVIDER;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

mod merge;
pub mod sources;

use merge::merge_policy::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_SIMULATOR_LATENCY_MS, DEFAULT_TIMEOUT_SECS,
};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WriterConfig {
    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub simulator: SimulatorSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider selector; only `"gemini"` enables the external path
    #[serde(default)]
    pub selector: Option<String>,

    /// Endpoint override (models collection URL)
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Whole-request bound in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS as u64
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS as u64
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            selector: None,
            endpoint: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ProviderSettings {
    /// True when both a key and the supported selector are present.
    pub fn is_enabled(&self) -> bool {
        self.has_api_key() && self.selector_matches()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    fn selector_matches(&self) -> bool {
        self.selector
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case(SUPPORTED_PROVIDER))
            .unwrap_or(false)
    }

    /// Validate provider settings
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than zero".to_string());
        }
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "Endpoint must start with http:// or https://: {}",
                    endpoint
                ));
            }
        }
        Ok(())
    }
}

/// Deterministic simulator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorSettings {
    /// Cosmetic delay before returning simulated output; 0 disables it
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    DEFAULT_SIMULATOR_LATENCY_MS as u64
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl WriterConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        self.provider
            .validate()
            .map_err(|e| ApiError::ConfigError(format!("Provider: {}", e)))
    }
}

/// Loads [`WriterConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, an optional file, and the process environment.
    pub fn load(path: Option<&Path>) -> Result<WriterConfig, ApiError> {
        Self::load_with_env(path, &sources::environment::process_env())
    }

    /// Load from a config file and the process environment.
    pub fn load_from_file(path: &Path) -> Result<WriterConfig, ApiError> {
        Self::load(Some(path))
    }

    /// Load with an explicit environment map instead of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> Result<WriterConfig, ApiError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        if let Some(path) = path {
            builder = sources::config_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder, env)?;

        let config: WriterConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            provider_enabled = config.provider.is_enabled(),
            model = %config.provider.model,
            has_endpoint = config.provider.endpoint.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
