//! Core data types for article generation.
//!
//! A [`GenerationRequest`] goes in, an [`ArticlePayload`] comes out. Everything
//! between the two is owned by a single call to the orchestrator.

use crate::error::ApiError;
use crate::simulator::templates::collapse_whitespace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of article to produce. Drives word-count band, FAQ count, and prompt shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    Pillar,
    #[default]
    Supporting,
}

impl ArticleType {
    /// Parse a caller-supplied type. Absent or unrecognized values become `Supporting`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "pillar" => ArticleType::Pillar,
            _ => ArticleType::Supporting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleType::Pillar => "pillar",
            ArticleType::Supporting => "supporting",
        }
    }

    /// Word count the simulator aims for.
    pub fn target_words(self) -> usize {
        match self {
            ArticleType::Pillar => 2500,
            ArticleType::Supporting => 1200,
        }
    }

    /// Inclusive word-count band stated in the prompt.
    pub fn word_band(self) -> (usize, usize) {
        match self {
            ArticleType::Pillar => (2500, 3000),
            ArticleType::Supporting => (1000, 1500),
        }
    }

    /// Inclusive FAQ-count band stated in the prompt.
    pub fn faq_band(self) -> (usize, usize) {
        match self {
            ArticleType::Pillar => (5, 8),
            ArticleType::Supporting => (3, 5),
        }
    }

    /// Fewest FAQs an accepted payload may carry.
    pub fn min_faqs(self) -> usize {
        self.faq_band().0
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated generation request.
///
/// Construct with [`GenerationRequest::new`]; the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    primary_keyword: String,
    title: String,
    article_type: ArticleType,
}

impl GenerationRequest {
    /// Validate and build a request. Whitespace runs in keyword and title
    /// collapse to single spaces; both must be non-empty afterwards.
    pub fn new(
        primary_keyword: impl Into<String>,
        title: impl Into<String>,
        article_type: ArticleType,
    ) -> Result<Self, ApiError> {
        let primary_keyword = collapse_whitespace(&primary_keyword.into());
        let title = collapse_whitespace(&title.into());

        if primary_keyword.is_empty() {
            return Err(ApiError::InvalidRequest(
                "primaryKeyword must not be empty".to_string(),
            ));
        }
        if title.is_empty() {
            return Err(ApiError::InvalidRequest(
                "title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            primary_keyword,
            title,
            article_type,
        })
    }

    pub fn primary_keyword(&self) -> &str {
        &self.primary_keyword
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn article_type(&self) -> ArticleType {
        self.article_type
    }
}

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Normalized article returned by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: String,
    pub meta_description: String,
    pub content: String,
    pub faqs: Vec<Faq>,
    pub json_ld: Value,
}

/// Keys every `jsonLd` block must carry.
pub const JSON_LD_REQUIRED_KEYS: [&str; 4] = ["@context", "@type", "headline", "keywords"];

impl ArticlePayload {
    /// Check the payload invariants for the given article type.
    pub fn satisfies_invariants(&self, article_type: ArticleType) -> bool {
        if self.content.trim().is_empty() || self.title.trim().is_empty() {
            return false;
        }
        if self.faqs.len() < article_type.min_faqs() {
            return false;
        }
        match self.json_ld.as_object() {
            Some(obj) => {
                JSON_LD_REQUIRED_KEYS.iter().all(|k| obj.contains_key(*k))
                    && obj.get("@type").and_then(Value::as_str) == Some("Article")
            }
            None => false,
        }
    }
}

/// Unstructured text returned by the provider. Only the normalizer reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGenerationResponse(String);

impl RawGenerationResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First `max_chars` characters, for log output.
    pub fn preview(&self, max_chars: usize) -> String {
        self.0.chars().take(max_chars).collect()
    }
}
