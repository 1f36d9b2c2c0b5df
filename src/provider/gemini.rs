//! Gemini `generateContent` client.
//!
//! One POST per prompt. The prompt is the sole user turn, generation
//! parameters are fixed, and every safety category is set to `BLOCK_NONE`.

use super::{build_provider_http_client, map_http_error, status_error, GenerationProvider};
use crate::error::ProviderError;
use crate::types::RawGenerationResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 8000;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
];

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Clone, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentRequest {
    pub(crate) fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: Some(vec![Part {
                    text: Some(prompt.to_string()),
                }]),
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                top_p: TOP_P,
                top_k: TOP_K,
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        }
    }
}

/// Read the first candidate's first text part.
pub(crate) fn extract_text(
    response: GenerateContentResponse,
) -> Result<RawGenerationResponse, ProviderError> {
    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or(ProviderError::EmptyResponse)?;

    candidate
        .content
        .and_then(|c| c.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .map(RawGenerationResponse::new)
        .ok_or_else(|| {
            ProviderError::MalformedResponse("candidate has no content text part".to_string())
        })
}

/// Gemini provider client
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
    request_timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        model: String,
        api_key: String,
        endpoint: Option<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = build_provider_http_client(connect_timeout, request_timeout)?;
        let endpoint = endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            model,
            api_key,
            endpoint,
            request_timeout,
        })
    }

    /// Endpoint URL without the key query parameter.
    pub fn request_url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<RawGenerationResponse, ProviderError> {
        let url = self.request_url();
        info!(url = %url, model = %self.model, prompt_chars = prompt.len(), "Calling Gemini");

        let request = GenerateContentRequest::for_prompt(prompt);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| map_http_error(e, self.request_timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_http_error(e, self.request_timeout))?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Gemini request failed");
            return Err(status_error(status.as_u16(), body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let text = extract_text(parsed)?;
        debug!(response_chars = text.len(), "Gemini response received");
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
