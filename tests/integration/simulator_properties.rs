//! Simulator output properties across keywords and article types

use proptest::prelude::*;
use seo_writer::quality::{analyze, duplicate_paragraphs, word_count};
use seo_writer::simulator::simulate;
use seo_writer::types::ArticleType;

fn article_type() -> impl Strategy<Value = ArticleType> {
    prop_oneof![Just(ArticleType::Pillar), Just(ArticleType::Supporting)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn word_count_stays_within_band(
        keyword in "[a-z]{1,12}( [a-z]{1,12}){0,2}",
        kind in article_type(),
    ) {
        let payload = simulate(&keyword, "Title", kind);
        let target = kind.target_words() as f64;
        let words = word_count(&payload.content) as f64;

        prop_assert!(words >= target * 0.85 && words <= target * 1.15);
    }

    #[test]
    fn paragraphs_are_never_repeated(
        keyword in "[a-z]{1,12}( [a-z]{1,12}){0,2}",
        kind in article_type(),
    ) {
        let payload = simulate(&keyword, "Title", kind);
        prop_assert_eq!(duplicate_paragraphs(&payload.content), 0);
    }

    #[test]
    fn faqs_and_schema_match_type(
        keyword in "[a-z]{1,12}",
        title in "[A-Z][a-z ]{0,30}",
        kind in article_type(),
    ) {
        let payload = simulate(&keyword, &title, kind);
        let (low, high) = kind.faq_band();

        prop_assert!(payload.faqs.len() >= low && payload.faqs.len() <= high);
        prop_assert_eq!(&payload.title, &title);
        prop_assert_eq!(payload.json_ld["headline"].as_str(), Some(title.as_str()));
        prop_assert_eq!(payload.json_ld["keywords"].as_str(), Some(keyword.as_str()));
        prop_assert!(payload.satisfies_invariants(kind));
    }

    #[test]
    fn simulation_is_deterministic(keyword in "[a-z]{1,12}", kind in article_type()) {
        prop_assert_eq!(simulate(&keyword, "T", kind), simulate(&keyword, "T", kind));
    }
}

#[test]
fn simulated_content_has_no_placeholders() {
    let payload = simulate("probiotics", "Probiotics Guide", ArticleType::Pillar);
    let report = analyze(&payload.content, "probiotics");

    assert_eq!(report.placeholder_count, 0);
    assert_eq!(report.duplicate_paragraphs, 0);
    assert!(!payload.content.contains("{keyword}"));
}
