//! SEO Writer: article generation with a deterministic fallback
//!
//! Builds a prompt for a keyword and title, asks an external text-generation
//! model for a structured article, and normalizes the reply. Whenever the
//! provider is unconfigured or fails, a deterministic simulator produces the
//! article instead, so callers always receive a complete payload.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod quality;
pub mod simulator;
pub mod types;

pub use config::{ConfigLoader, WriterConfig};
pub use error::{ApiError, FallbackReason, ProviderError};
pub use orchestrator::{ArticleGenerator, ArticleSource, GenerationOutcome, ProviderStatus};
pub use types::{ArticlePayload, ArticleType, Faq, GenerationRequest, RawGenerationResponse};
