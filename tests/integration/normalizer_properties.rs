//! Normalizer properties

use proptest::prelude::*;
use seo_writer::normalize::normalize;
use seo_writer::types::{ArticleType, RawGenerationResponse};

fn article_json(title: &str, content: &str) -> String {
    serde_json::json!({
        "title": title,
        "content": content,
        "faqs": [{"question": "Why?", "answer": "Because."}]
    })
    .to_string()
}

proptest! {
    #[test]
    fn fenced_and_unfenced_replies_normalize_identically(
        title in "[A-Za-z][A-Za-z0-9 ]{0,40}",
        content in "[A-Za-z<>/][A-Za-z0-9 .,<>/]{0,200}",
        tag in prop::sample::select(vec!["", "json", "JSON"]),
    ) {
        let body = article_json(&title, &content);
        let plain = normalize(
            &RawGenerationResponse::new(body.clone()),
            "Fallback",
            "kefir",
            ArticleType::Supporting,
        );
        let fenced = normalize(
            &RawGenerationResponse::new(format!("```{}\n{}\n```", tag, body)),
            "Fallback",
            "kefir",
            ArticleType::Supporting,
        );

        prop_assert!(plain.is_some());
        prop_assert_eq!(plain, fenced);
    }

    #[test]
    fn commentary_around_object_is_ignored(
        prefix in "[A-Za-z !:.]{0,60}",
        suffix in "[A-Za-z !:.]{0,60}",
    ) {
        let body = article_json("Title", "<p>Body</p>");
        let wrapped = format!("{}{}{}", prefix, body, suffix);
        let payload = normalize(
            &RawGenerationResponse::new(wrapped),
            "Fallback",
            "kefir",
            ArticleType::Supporting,
        );

        prop_assert!(payload.is_some());
        prop_assert_eq!(payload.map(|p| p.content), Some("<p>Body</p>".to_string()));
    }

    #[test]
    fn replies_without_braces_are_rejected(text in "[^{}]{0,300}") {
        let payload = normalize(
            &RawGenerationResponse::new(text),
            "Fallback",
            "kefir",
            ArticleType::Supporting,
        );
        prop_assert!(payload.is_none());
    }

    #[test]
    fn accepted_payloads_always_carry_required_fields(
        content in "[A-Za-z][A-Za-z0-9 ]{0,80}",
        keyword in "[a-z]{1,12}",
    ) {
        let reply = serde_json::json!({ "content": content }).to_string();
        let payload = normalize(
            &RawGenerationResponse::new(reply),
            "Fallback",
            &keyword,
            ArticleType::Supporting,
        )
        .unwrap();

        prop_assert_eq!(payload.title, "Fallback".to_string());
        prop_assert!(!payload.meta_description.is_empty());
        prop_assert!(!payload.faqs.is_empty());
        for key in ["@context", "@type", "headline", "keywords"] {
            prop_assert!(payload.json_ld.get(key).is_some());
        }
    }
}
