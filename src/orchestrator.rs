//! Generation Orchestrator
//!
//! Entry point of the pipeline. Each request runs a two-state machine:
//!
//! - `ExternalAttempt`: build the prompt, make one provider call, normalize.
//!   Entered only when the injected configuration enables the provider.
//! - `SimulatorFallback` (terminal): run the deterministic simulator.
//!
//! Every failure on the external path (transport, timeout, empty or malformed
//! reply, unparseable content) moves to `SimulatorFallback` without a retry.
//! The failure reason is logged and otherwise ignored. Callers always get a
//! valid [`ArticlePayload`].

use crate::config::{ProviderSettings, WriterConfig};
use crate::error::{FallbackReason, ProviderError};
use crate::normalize::normalize;
use crate::prompt;
use crate::provider::{create_provider, GenerationProvider};
use crate::quality;
use crate::simulator;
use crate::types::{ArticlePayload, ArticleType, Faq, GenerationRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument, warn, Level};

/// Pipeline state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPath {
    ExternalAttempt,
    SimulatorFallback,
}

/// Where the returned article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleSource {
    External,
    Simulator,
}

/// Article plus its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub payload: ArticlePayload,
    pub source: ArticleSource,
}

/// Provider readiness as seen by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    pub enabled: bool,
    pub provider: Option<String>,
    pub status: String,
    pub api_key_configured: bool,
    pub has_endpoint: bool,
}

/// Article generation orchestrator.
///
/// Holds read-only configuration and, when enabled, one provider client.
/// Shared across concurrent requests without locking.
pub struct ArticleGenerator {
    provider: Option<Box<dyn GenerationProvider>>,
    settings: ProviderSettings,
    simulator_latency: Duration,
}

impl ArticleGenerator {
    /// Build from configuration, creating the provider client when enabled.
    ///
    /// A client that cannot be constructed is logged and treated as absent.
    pub fn new(config: &WriterConfig) -> Self {
        let provider = match create_provider(&config.provider) {
            Ok(provider) => provider,
            Err(e) => {
                warn!(error = %e, "Provider client unavailable, simulator only");
                None
            }
        };
        Self::assemble(config, provider)
    }

    /// Build with an explicit provider client. The client is only used when
    /// the configuration enables the external path.
    pub fn with_provider(config: &WriterConfig, provider: Box<dyn GenerationProvider>) -> Self {
        let provider = config.provider.is_enabled().then_some(provider);
        Self::assemble(config, provider)
    }

    fn assemble(config: &WriterConfig, provider: Option<Box<dyn GenerationProvider>>) -> Self {
        Self {
            provider,
            settings: config.provider.clone(),
            simulator_latency: Duration::from_millis(config.simulator.latency_ms),
        }
    }

    /// Path a request will start on.
    pub fn initial_path(&self) -> GenerationPath {
        if self.provider.is_some() {
            GenerationPath::ExternalAttempt
        } else {
            GenerationPath::SimulatorFallback
        }
    }

    pub fn provider_status(&self) -> ProviderStatus {
        let api_key_configured = self.settings.has_api_key();
        let enabled = self.provider.is_some();
        ProviderStatus {
            enabled,
            provider: self.settings.selector.clone().filter(|s| !s.trim().is_empty()),
            status: if enabled { "ready" } else { "not configured" }.to_string(),
            api_key_configured,
            has_endpoint: self.settings.endpoint.is_some(),
        }
    }

    /// Generate an article. Never fails for provider-side reasons.
    pub async fn generate_article(&self, request: &GenerationRequest) -> ArticlePayload {
        self.generate(request).await.payload
    }

    /// Generate an article and report which path produced it.
    #[instrument(
        skip(self, request),
        fields(
            keyword = %request.primary_keyword(),
            article_type = %request.article_type(),
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let reason = match self.provider.as_deref() {
            Some(provider) => match self.attempt_external(provider, request).await {
                Ok(payload) => {
                    info!(provider = provider.provider_name(), "Article generated by provider");
                    log_quality(&payload, request.primary_keyword());
                    return GenerationOutcome {
                        payload,
                        source: ArticleSource::External,
                    };
                }
                Err(reason) => reason,
            },
            None => FallbackReason::NotConfigured,
        };

        match &reason {
            FallbackReason::NotConfigured => info!(
                api_key_configured = self.settings.has_api_key(),
                selector = ?self.settings.selector,
                "Provider not configured, using simulator"
            ),
            other => warn!(
                reason = other.label(),
                error = %other,
                "External generation failed, falling back to simulator"
            ),
        }

        let payload = self.simulate(request).await;
        log_quality(&payload, request.primary_keyword());
        GenerationOutcome {
            payload,
            source: ArticleSource::Simulator,
        }
    }

    async fn attempt_external(
        &self,
        provider: &dyn GenerationProvider,
        request: &GenerationRequest,
    ) -> Result<ArticlePayload, FallbackReason> {
        let prompt = prompt::build(
            request.primary_keyword(),
            request.title(),
            request.article_type(),
        );
        debug!(
            prompt_chars = prompt.len(),
            model = provider.model_name(),
            "Prompt built"
        );

        let timeout_secs = self.settings.timeout_secs;
        let raw = tokio::time::timeout(Duration::from_secs(timeout_secs), provider.generate(&prompt))
            .await
            .map_err(|_| ProviderError::Timeout { timeout_secs })??;
        debug!(response_chars = raw.len(), "Provider response received");

        let mut payload = normalize(
            &raw,
            request.title(),
            request.primary_keyword(),
            request.article_type(),
        )
        .ok_or(FallbackReason::ParseFailure)?;
        top_up_faqs(
            &mut payload.faqs,
            request.primary_keyword(),
            request.article_type(),
        );
        Ok(payload)
    }

    async fn simulate(&self, request: &GenerationRequest) -> ArticlePayload {
        if !self.simulator_latency.is_zero() {
            tokio::time::sleep(self.simulator_latency).await;
        }
        info!("Generating simulated article");
        simulator::simulate(
            request.primary_keyword(),
            request.title(),
            request.article_type(),
        )
    }
}

/// Append generated FAQs with new questions until the type minimum is met.
fn top_up_faqs(faqs: &mut Vec<Faq>, keyword: &str, article_type: ArticleType) {
    let minimum = article_type.min_faqs();
    if faqs.len() >= minimum {
        return;
    }

    let mut seen: HashSet<String> = faqs.iter().map(|f| f.question.to_lowercase()).collect();
    let candidates = simulator::generate_faqs(keyword, simulator::templates::FAQ_TEMPLATES.len());
    for faq in candidates {
        if faqs.len() >= minimum {
            break;
        }
        if seen.insert(faq.question.to_lowercase()) {
            faqs.push(faq);
        }
    }
    debug!(faq_count = faqs.len(), minimum, "Topped up provider FAQs");
}

fn log_quality(payload: &ArticlePayload, keyword: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    let report = quality::analyze(&payload.content, keyword);
    debug!(
        words = report.word_count,
        paragraphs = report.paragraph_count,
        duplicate_paragraphs = report.duplicate_paragraphs,
        repetition_rate = report.repetition_rate,
        keyword_density = report.keyword_density,
        placeholders = report.placeholder_count,
        score = report.score,
        "Content quality"
    );
}
