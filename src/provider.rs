//! Generation Provider Abstraction
//!
//! A provider takes a finished prompt and returns the raw completion text in a
//! single round trip. The orchestrator only sees [`GenerationProvider`]; wire
//! formats, HTTP transport, and error classification live in the concrete
//! clients under this module.

use crate::config::ProviderSettings;
use crate::error::ProviderError;
use crate::types::RawGenerationResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub mod gemini;

pub use gemini::GeminiClient;

/// The only provider selector value that enables the external path.
pub const SUPPORTED_PROVIDER: &str = "gemini";

/// Provider client trait
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Send the prompt and return the first candidate's text.
    async fn generate(&self, prompt: &str) -> Result<RawGenerationResponse, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// Build the concrete client for the configured provider.
///
/// Returns `Ok(None)` when the settings do not enable the external path.
pub fn create_provider(
    settings: &ProviderSettings,
) -> Result<Option<Box<dyn GenerationProvider>>, ProviderError> {
    if !settings.is_enabled() {
        return Ok(None);
    }
    let api_key = settings.api_key.clone().unwrap_or_default();
    let client = GeminiClient::new(
        settings.model.clone(),
        api_key,
        settings.endpoint.clone(),
        Duration::from_secs(settings.connect_timeout_secs),
        Duration::from_secs(settings.timeout_secs),
    )?;
    Ok(Some(Box::new(client)))
}

pub(crate) fn build_provider_http_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client, ProviderError> {
    Client::builder()
        .no_proxy()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ProviderError::ClientBuild(e.to_string()))
}

// Map transport-level reqwest errors (no response received) to ProviderError.
// The request URL carries the API key, so it is stripped before formatting.
pub(crate) fn map_http_error(error: reqwest::Error, request_timeout: Duration) -> ProviderError {
    let error = error.without_url();
    if error.is_timeout() {
        ProviderError::Timeout {
            timeout_secs: request_timeout.as_secs(),
        }
    } else if error.is_connect() {
        ProviderError::Transport {
            status: None,
            message: format!("Connection error: {}", error),
            body: None,
        }
    } else {
        ProviderError::Transport {
            status: error.status().map(|s| s.as_u16()),
            message: format!("HTTP error: {}", error),
            body: None,
        }
    }
}

// Classify a non-2xx status with the provider's error body
pub(crate) fn status_error(status: u16, body: String) -> ProviderError {
    let message = match status {
        400 => "Bad request",
        401 | 403 => "Authentication failed",
        404 => "Model not found",
        429 => "Rate limit exceeded",
        500..=599 => "Provider unavailable",
        _ => "Request failed",
    };
    ProviderError::Transport {
        status: Some(status),
        message: message.to_string(),
        body: if body.is_empty() { None } else { Some(body) },
    }
}
