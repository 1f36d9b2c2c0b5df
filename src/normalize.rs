//! Response Normalizer
//!
//! Turns untrusted provider text into an [`ArticlePayload`] or nothing. The
//! reply is only pattern-matched and parsed as inert JSON: code fences are
//! stripped, the outermost `{ ... }` span is located, the span is parsed, and
//! the mandatory `content` field is checked before anything is accepted.
//! Optional fields the provider omitted are filled from the simulator's
//! generators.

use crate::simulator;
use crate::types::{ArticlePayload, ArticleType, Faq, RawGenerationResponse, JSON_LD_REQUIRED_KEYS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

const PARSE_PREVIEW_CHARS: usize = 200;
const FAILURE_PREVIEW_CHARS: usize = 500;

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*```[a-z0-9_-]*[ \t]*\r?\n?").unwrap());
static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n?```\s*$").unwrap());
static OBJECT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Provider-side view of the payload. Every field is optional here; the
/// normalizer decides what is mandatory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderArticle {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    meta_description: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    faqs: Option<Value>,
    #[serde(default)]
    json_ld: Option<Value>,
}

/// Normalize a provider reply into a full payload.
///
/// Returns `None` when no JSON object can be extracted or when it lacks a
/// non-empty `content` string. Missing FAQs are generated in the count the
/// simulator uses for `article_type`.
pub fn normalize(
    raw: &RawGenerationResponse,
    fallback_title: &str,
    keyword: &str,
    article_type: ArticleType,
) -> Option<ArticlePayload> {
    let cleaned = strip_code_fences(raw.as_str());

    let Some(span) = extract_object_span(&cleaned) else {
        warn!(
            preview = %preview(&cleaned, PARSE_PREVIEW_CHARS),
            "No JSON object found in provider response"
        );
        return None;
    };
    debug!(span_chars = span.len(), "Parsing provider JSON");

    let article: ProviderArticle = match serde_json::from_str(span) {
        Ok(article) => article,
        Err(e) => {
            warn!(
                error = %e,
                preview = %raw.preview(FAILURE_PREVIEW_CHARS),
                "Failed to parse provider JSON"
            );
            return None;
        }
    };

    let Some(content) = non_empty_string(article.content.as_ref()) else {
        warn!(
            preview = %raw.preview(FAILURE_PREVIEW_CHARS),
            "Provider JSON missing 'content' field"
        );
        return None;
    };

    let title = non_empty_string(article.title.as_ref()).unwrap_or_else(|| fallback_title.to_string());
    let meta_description = non_empty_string(article.meta_description.as_ref())
        .unwrap_or_else(|| simulator::meta_description(keyword));
    let faqs = article
        .faqs
        .as_ref()
        .map(parse_faqs)
        .filter(|faqs| !faqs.is_empty())
        .unwrap_or_else(|| simulator::generate_faqs(keyword, simulator::faq_count(article_type)));
    let json_ld = complete_json_ld(article.json_ld, &title, keyword);

    Some(ArticlePayload {
        title,
        meta_description,
        content,
        faqs,
        json_ld,
    })
}

/// Remove one leading fence line (with or without a language tag) and one trailing fence.
pub fn strip_code_fences(text: &str) -> String {
    let cleaned = LEADING_FENCE.replace(text.trim(), "");
    let cleaned = TRAILING_FENCE.replace(&cleaned, "");
    cleaned.trim().to_string()
}

/// First `{` through last `}`.
pub fn extract_object_span(text: &str) -> Option<&str> {
    OBJECT_SPAN.find(text).map(|m| m.as_str())
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keep well-formed `{question, answer}` entries; drop the rest.
fn parse_faqs(value: &Value) -> Vec<Faq> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let question = non_empty_string(entry.get("question"))?;
            let answer = non_empty_string(entry.get("answer"))?;
            Some(Faq { question, answer })
        })
        .collect()
}

/// Use the provider's block when it is an object, adding any required key it
/// lacks; otherwise synthesize one.
fn complete_json_ld(value: Option<Value>, title: &str, keyword: &str) -> Value {
    let synthesized = simulator::json_ld(title, keyword);
    let Some(Value::Object(mut provided)) = value else {
        return synthesized;
    };

    let defaults: Map<String, Value> = match synthesized {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for key in JSON_LD_REQUIRED_KEYS {
        let missing = provided.get(key).map(Value::is_null).unwrap_or(true);
        if missing {
            if let Some(default) = defaults.get(key) {
                provided.insert(key.to_string(), default.clone());
            }
        }
    }
    Value::Object(provided)
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
