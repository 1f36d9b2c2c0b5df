//! Error types for the article generation pipeline.

use thiserror::Error;

/// Failures raised by a generation provider.
///
/// None of these ever reach the caller of the orchestrator; they are logged and
/// converge on the simulator fallback.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },

    #[error("Provider request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Provider returned no candidates")]
    EmptyResponse,

    #[error("Provider response malformed: {0}")]
    MalformedResponse(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

impl ProviderError {
    /// Provider error body, when the provider sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            ProviderError::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {}", code),
        None => String::new(),
    }
}

/// Crate-level errors surfaced to callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Why a request ended on the simulator path. Carried for logging only.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("external provider not configured")]
    NotConfigured,

    #[error("external provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("provider reply could not be parsed into an article")]
    ParseFailure,
}

impl FallbackReason {
    /// Short stable label for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => "not_configured",
            FallbackReason::Provider(ProviderError::Timeout { .. }) => "timeout",
            FallbackReason::Provider(ProviderError::EmptyResponse) => "empty_response",
            FallbackReason::Provider(ProviderError::MalformedResponse(_)) => "malformed_response",
            FallbackReason::Provider(_) => "transport_error",
            FallbackReason::ParseFailure => "parse_failure",
        }
    }
}
