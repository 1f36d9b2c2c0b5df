//! Deterministic Simulator
//!
//! Builds a structurally valid [`ArticlePayload`] with no network access. The
//! same inputs always produce the same article. Used whenever the external
//! provider is unconfigured or fails.
//!
//! The FAQ, structured-data, and meta generators are also used by the
//! normalizer to fill fields a provider left out.

use crate::quality::word_count;
use crate::types::{ArticlePayload, ArticleType, Faq};
use serde_json::{json, Value};

pub mod templates;

use templates::{
    fill, FAQ_CLOSING, FAQ_TEMPLATES, META_DESCRIPTION, PARAGRAPH_ANGLES, PARAGRAPH_LEADS,
    SCHEMA_AUTHOR, SCHEMA_CONTEXT,
};

/// Produce a complete simulated article. Never fails.
pub fn simulate(keyword: &str, title: &str, article_type: ArticleType) -> ArticlePayload {
    ArticlePayload {
        title: title.to_string(),
        meta_description: meta_description(keyword),
        content: generate_content(keyword, article_type.target_words()),
        faqs: generate_faqs(keyword, faq_count(article_type)),
        json_ld: json_ld(title, keyword),
    }
}

/// FAQ count the simulator emits for an article type.
pub fn faq_count(article_type: ArticleType) -> usize {
    match article_type {
        ArticleType::Pillar => 5,
        ArticleType::Supporting => 3,
    }
}

/// Concatenate paragraphs until `target_words` is reached, cutting the last
/// paragraph at the word boundary. Paragraphs are separated by a blank line.
pub fn generate_content(keyword: &str, target_words: usize) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut words = 0usize;
    let mut index = 0usize;

    while words < target_words {
        let paragraph = compose_paragraph(keyword, index);
        let paragraph_words = word_count(&paragraph);

        if words + paragraph_words > target_words {
            paragraphs.push(truncate_words(&paragraph, target_words - words));
            break;
        }

        words += paragraph_words;
        paragraphs.push(paragraph);
        index += 1;
    }

    paragraphs.join("\n\n")
}

/// Paragraph `index` pairs a lead (cycled in order) with the angle for the
/// current pass over the leads.
fn compose_paragraph(keyword: &str, index: usize) -> String {
    let lead = PARAGRAPH_LEADS[index % PARAGRAPH_LEADS.len()];
    let pass = index / PARAGRAPH_LEADS.len();
    let angle = PARAGRAPH_ANGLES[pass % PARAGRAPH_ANGLES.len()];
    format!("{} {}", fill(lead, keyword), angle)
}

fn truncate_words(paragraph: &str, max_words: usize) -> String {
    let mut truncated = paragraph
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");
    if !truncated.ends_with(['.', '!', '?']) {
        truncated = truncated
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .to_string();
        truncated.push('.');
    }
    truncated
}

/// Build up to `count` FAQs from the template bank, in bank order.
pub fn generate_faqs(keyword: &str, count: usize) -> Vec<Faq> {
    FAQ_TEMPLATES
        .iter()
        .take(count)
        .map(|t| Faq {
            question: fill(t.question, keyword),
            answer: format!(
                "{} {} {}",
                fill(t.topic, keyword),
                fill(t.detail, keyword),
                FAQ_CLOSING
            ),
        })
        .collect()
}

/// Minimal schema.org Article block.
pub fn json_ld(title: &str, keyword: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": title,
        "keywords": keyword,
        "author": { "@type": "Person", "name": SCHEMA_AUTHOR },
    })
}

/// One-line meta description.
pub fn meta_description(keyword: &str) -> String {
    fill(META_DESCRIPTION, keyword)
}
