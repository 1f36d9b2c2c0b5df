//! Content quality analysis.
//!
//! Measures what the prompt asks the provider for: length, repetition,
//! placeholder text, keyword density, and sentence variety. The orchestrator
//! logs a report for every article; nothing here changes the payload.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Optimal keyword density band, in percent.
pub const DENSITY_BAND: (f64, f64) = (0.8, 1.2);

const REPETITION_THRESHOLD: f64 = 10.0;
const MIN_SENTENCE_CHARS: usize = 20;
const MIN_SENTENCE_SPREAD: usize = 15;

static PLACEHOLDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)this section explores",
        r"(?i)answer \d+:",
        r"(?i)repeat\(",
        r"(?i)placeholder",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split on blank-line boundaries, dropping empty chunks.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of paragraphs that repeat an earlier paragraph verbatim.
pub fn duplicate_paragraphs(text: &str) -> usize {
    let mut seen = HashSet::new();
    paragraphs(text)
        .into_iter()
        .filter(|p| !seen.insert(*p))
        .count()
}

/// Keyword occurrences (case-insensitive) per hundred words.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let words = word_count(text);
    let keyword = keyword.trim();
    if words == 0 || keyword.is_empty() {
        return 0.0;
    }
    let occurrences = text
        .to_lowercase()
        .matches(&keyword.to_lowercase())
        .count();
    occurrences as f64 / words as f64 * 100.0
}

/// Quality measurements for one article body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentQualityReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub unique_sentence_count: usize,
    /// Percentage of sentences that repeat an earlier one.
    pub repetition_rate: f64,
    pub placeholder_count: usize,
    /// Keyword occurrences per hundred words.
    pub keyword_density: f64,
    pub avg_sentence_len: f64,
    pub min_sentence_len: usize,
    pub max_sentence_len: usize,
    pub paragraph_count: usize,
    pub duplicate_paragraphs: usize,
    /// 0-100
    pub score: u32,
}

impl ContentQualityReport {
    pub fn density_in_band(&self) -> bool {
        self.keyword_density >= DENSITY_BAND.0 && self.keyword_density <= DENSITY_BAND.1
    }
}

/// Analyze an article body against a primary keyword.
pub fn analyze(content: &str, keyword: &str) -> ContentQualityReport {
    let sentences: Vec<String> = SENTENCE_SPLIT
        .split(content)
        .map(|s| s.trim())
        .filter(|s| s.len() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect();
    let unique: HashSet<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

    let repetition_rate = if sentences.is_empty() {
        0.0
    } else {
        (sentences.len() - unique.len()) as f64 / sentences.len() as f64 * 100.0
    };

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| word_count(s))
        .filter(|n| *n > 0)
        .collect();
    let (avg_sentence_len, min_sentence_len, max_sentence_len) = if lengths.is_empty() {
        (0.0, 0, 0)
    } else {
        let total: usize = lengths.iter().sum();
        (
            total as f64 / lengths.len() as f64,
            lengths.iter().copied().min().unwrap_or(0),
            lengths.iter().copied().max().unwrap_or(0),
        )
    };

    let placeholder_count = PLACEHOLDER_PATTERNS
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum();

    let mut report = ContentQualityReport {
        word_count: word_count(content),
        sentence_count: sentences.len(),
        unique_sentence_count: unique.len(),
        repetition_rate,
        placeholder_count,
        keyword_density: keyword_density(content, keyword),
        avg_sentence_len,
        min_sentence_len,
        max_sentence_len,
        paragraph_count: paragraphs(content).len(),
        duplicate_paragraphs: duplicate_paragraphs(content),
        score: 0,
    };
    report.score = score(&report);
    report
}

fn score(report: &ContentQualityReport) -> u32 {
    let mut score: u32 = 100;
    if report.repetition_rate > REPETITION_THRESHOLD {
        score -= 30;
    }
    if report.placeholder_count > 0 {
        score -= 20;
    }
    if !report.density_in_band() {
        score -= 10;
    }
    if report.max_sentence_len - report.min_sentence_len < MIN_SENTENCE_SPREAD {
        score -= 10;
    }
    score
}
