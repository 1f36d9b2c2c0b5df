//! CLI output: JSON and text rendering plus error mapping.

use crate::error::ApiError;
use crate::orchestrator::{GenerationOutcome, ProviderStatus};
use crate::quality::ContentQualityReport;
use serde_json::json;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

/// Article JSON, with the source and an optional quality report alongside.
pub fn format_generation_output(
    outcome: &GenerationOutcome,
    quality: Option<&ContentQualityReport>,
) -> Result<String, ApiError> {
    let mut value = json!({
        "source": outcome.source,
        "article": outcome.payload,
    });
    if let Some(report) = quality {
        value["quality"] = json!(report);
    }
    serde_json::to_string_pretty(&value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

pub fn format_status_text(status: &ProviderStatus) -> String {
    let provider = status.provider.as_deref().unwrap_or("(none)");
    [
        format!("Provider:        {}", provider),
        format!("Status:          {}", status.status),
        format!("Enabled:         {}", yes_no(status.enabled)),
        format!("API key set:     {}", yes_no(status.api_key_configured)),
        format!("Custom endpoint: {}", yes_no(status.has_endpoint)),
    ]
    .join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
