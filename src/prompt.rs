//! Prompt Builder
//!
//! Maps `(keyword, title, article type)` to the instruction text sent to the
//! provider. The text carries the whole output contract: the JSON field names
//! the normalizer expects, the word-count band, the FAQ band, inline HTML
//! markup for `content`, and the quality rules. Pure string construction.

use crate::simulator::templates::SCHEMA_AUTHOR;
use crate::types::ArticleType;

/// Field names the provider must return.
pub const PAYLOAD_FIELDS: [&str; 5] = ["title", "metaDescription", "content", "faqs", "jsonLd"];

const KEYWORD_DENSITY: &str = "0.8-1.2%";
const READABILITY_GRADE: &str = "Grade 7-9";

/// Build the full prompt for one article.
pub fn build(keyword: &str, title: &str, article_type: ArticleType) -> String {
    let (min_words, max_words) = article_type.word_band();
    let (min_faqs, max_faqs) = article_type.faq_band();

    let mut prompt = String::with_capacity(4096);
    prompt.push_str(&intro(keyword, title, article_type, min_words, max_words));
    prompt.push_str(&quality_rules());
    prompt.push_str(&structure_rules(
        article_type,
        min_words,
        max_words,
        min_faqs,
        max_faqs,
    ));
    prompt.push_str(&output_contract(keyword, title, article_type, min_words, max_words));
    prompt
}

fn intro(
    keyword: &str,
    title: &str,
    article_type: ArticleType,
    min_words: usize,
    max_words: usize,
) -> String {
    let kind = match article_type {
        ArticleType::Pillar => "a comprehensive SEO-optimized pillar article",
        ArticleType::Supporting => "a focused SEO-optimized supporting article",
    };
    format!(
        "You are an expert SEO content writer specializing in gut health and wellness. \
         Generate {kind} ({min_words}-{max_words} words).\n\n\
         Article Title: {title}\n\
         Primary Keyword: {keyword}\n\n"
    )
}

fn quality_rules() -> String {
    "CRITICAL REQUIREMENTS FOR CONTENT QUALITY:\n\
     - EVERY paragraph must be unique and different from all others\n\
     - NO repeated sentences, phrases, or paragraphs\n\
     - NO placeholder text or repeated templates\n\
     - Use varied sentence structures and lengths\n\
     - Include specific details, examples, and actionable information\n\n"
        .to_string()
}

fn structure_rules(
    article_type: ArticleType,
    min_words: usize,
    max_words: usize,
    min_faqs: usize,
    max_faqs: usize,
) -> String {
    let structure = match article_type {
        ArticleType::Pillar => {
            "   - H1 with the keyword\n\
             \x20  - Introduction (100-150 words) that sets context and value\n\
             \x20  - Multiple H2 sections, each with H3 subsections exploring a different aspect\n\
             \x20  - Scannable bullet lists and varied formatting\n\
             \x20  - Conclusion with an actionable call to action\n"
        }
        ArticleType::Supporting => {
            "   - H1 with the keyword\n\
             \x20  - 3-4 H2 sections, each with distinct content\n\
             \x20  - Scannable format with bullet lists where useful\n\
             \x20  - Short conclusion\n"
        }
    };

    format!(
        "Requirements:\n\
         1. Keyword placement: use the keyword in the H1, within the first 100 words, \
         and naturally throughout ({KEYWORD_DENSITY} keyword density)\n\
         2. Structure:\n{structure}\
         3. SEO elements:\n\
         \x20  - Meta description (150-160 characters) that includes the keyword\n\
         \x20  - FAQ section ({min_faqs}-{max_faqs} question/answer pairs) with substantive answers\n\
         \x20  - JSON-LD schema markup\n\
         4. Readability: {READABILITY_GRADE} reading level, clear and easy to understand\n\
         5. Medical content: cite credible sources (NIH, CDC, NHS) and add medical disclaimers where appropriate\n\
         6. Length: {min_words}-{max_words} words of article content\n\n"
    )
}

fn output_contract(
    keyword: &str,
    title: &str,
    article_type: ArticleType,
    min_words: usize,
    max_words: usize,
) -> String {
    let title_json = json_string(title);
    let keyword_json = json_string(keyword);
    let example_faqs = example_faq_questions(keyword, article_type)
        .iter()
        .map(|q| {
            format!(
                "    {{\"question\": {}, \"answer\": \"Detailed, specific answer...\"}}",
                json_string(q)
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "IMPORTANT: Return ONLY a single valid JSON object without markdown formatting or code blocks. \
         Start with {{ and end with }}. Use exactly these fields: {fields}.\n\
         The \"content\" field is a single string containing the whole article with inline HTML tags \
         (<h2>, <h3>, <p>, <ul>, <li>, <strong>, <em>). Do not return sections as a separate structure.\n\n\
         {{\n\
         \x20 \"title\": {title_json},\n\
         \x20 \"metaDescription\": \"A 150-160 character meta description about {keyword_plain} that includes the keyword\",\n\
         \x20 \"content\": \"The complete {min_words}-{max_words} word article with inline HTML tags\",\n\
         \x20 \"faqs\": [\n{example_faqs}\n  ],\n\
         \x20 \"jsonLd\": {{\n\
         \x20   \"@context\": \"https://schema.org\",\n\
         \x20   \"@type\": \"Article\",\n\
         \x20   \"headline\": {title_json},\n\
         \x20   \"keywords\": {keyword_json},\n\
         \x20   \"author\": {{\"@type\": \"Person\", \"name\": \"{SCHEMA_AUTHOR}\"}}\n\
         \x20 }}\n\
         }}\n",
        fields = PAYLOAD_FIELDS.join(", "),
        keyword_plain = keyword.replace('"', "'"),
    )
}

fn example_faq_questions(keyword: &str, article_type: ArticleType) -> Vec<String> {
    let mut questions = vec![
        format!("What is {keyword}?"),
        format!("How does {keyword} affect digestion?"),
        format!("What foods support {keyword}?"),
    ];
    if article_type == ArticleType::Pillar {
        questions.push(format!("When should I see a doctor about {keyword}?"));
        questions.push(format!("Are there supplements for {keyword}?"));
    }
    questions
}

/// Encode a value as a JSON string literal.
fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
