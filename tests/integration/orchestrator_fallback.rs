//! Orchestrator path selection and fallback behaviour

use crate::integration::test_utils::{
    article_reply, disabled_config, enabled_config, gemini_envelope, serve_once, Script,
    ScriptedProvider,
};
use seo_writer::orchestrator::{ArticleGenerator, ArticleSource, GenerationPath};
use seo_writer::quality::word_count;
use seo_writer::simulator;
use seo_writer::types::{ArticleType, GenerationRequest};
use std::sync::atomic::Ordering;
use std::time::Duration;

fn probiotics_request() -> GenerationRequest {
    GenerationRequest::new("probiotics", "Probiotics Guide", ArticleType::Supporting).unwrap()
}

#[tokio::test]
async fn unconfigured_provider_is_never_called() {
    let (provider, calls) = ScriptedProvider::boxed(Script::Reply(article_reply(
        "Probiotics Guide",
        "probiotics",
        3,
    )));
    let generator = ArticleGenerator::with_provider(&disabled_config(), provider);
    assert_eq!(generator.initial_path(), GenerationPath::SimulatorFallback);

    let outcome = generator.generate(&probiotics_request()).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.source, ArticleSource::Simulator);
    let payload = outcome.payload;
    assert_eq!(payload.title, "Probiotics Guide");
    assert_eq!(word_count(&payload.content), 1200);
    assert_eq!(payload.faqs.len(), 3);
    assert_eq!(payload.json_ld["keywords"], "probiotics");
}

#[tokio::test]
async fn selector_other_than_gemini_stays_on_simulator() {
    let mut config = enabled_config();
    config.provider.selector = Some("openai".to_string());
    let (provider, calls) = ScriptedProvider::boxed(Script::Reply("{}".to_string()));
    let generator = ArticleGenerator::with_provider(&config, provider);

    let outcome = generator.generate(&probiotics_request()).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.source, ArticleSource::Simulator);
}

#[tokio::test]
async fn valid_reply_is_returned_as_is() {
    let (provider, calls) = ScriptedProvider::boxed(Script::Reply(format!(
        "```json\n{}\n```",
        article_reply("Provider Title", "probiotics", 4)
    )));
    let generator = ArticleGenerator::with_provider(&enabled_config(), provider);

    let outcome = generator.generate(&probiotics_request()).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.source, ArticleSource::External);
    assert_eq!(outcome.payload.title, "Provider Title");
    assert_eq!(outcome.payload.meta_description, "All about probiotics");
    assert_eq!(outcome.payload.faqs.len(), 4);
    assert!(outcome.payload.content.contains("Provider body"));
}

#[tokio::test]
async fn reply_without_content_falls_back_once() {
    let (provider, calls) = ScriptedProvider::boxed(Script::Reply(
        "Sure! Here's your article: {\"title\": \"X\"}".to_string(),
    ));
    let generator = ArticleGenerator::with_provider(&enabled_config(), provider);

    let request = probiotics_request();
    let outcome = generator.generate(&request).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.source, ArticleSource::Simulator);
    assert_eq!(outcome.payload.title, "Probiotics Guide");
    assert_eq!(
        outcome.payload,
        simulator::simulate("probiotics", "Probiotics Guide", ArticleType::Supporting)
    );
}

#[tokio::test]
async fn transport_failure_is_not_retried() {
    for script in [Script::Status(500), Script::Status(429), Script::Empty] {
        let (provider, calls) = ScriptedProvider::boxed(script);
        let generator = ArticleGenerator::with_provider(&enabled_config(), provider);

        let outcome = generator.generate(&probiotics_request()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.source, ArticleSource::Simulator);
        assert!(outcome.payload.satisfies_invariants(ArticleType::Supporting));
    }
}

#[tokio::test(start_paused = true)]
async fn hung_provider_times_out_to_simulator() {
    let mut config = enabled_config();
    config.provider.timeout_secs = 5;
    let (provider, calls) = ScriptedProvider::boxed(Script::Hang(Duration::from_secs(3600)));
    let generator = ArticleGenerator::with_provider(&config, provider);

    let started = tokio::time::Instant::now();
    let outcome = generator.generate(&probiotics_request()).await;
    let elapsed = started.elapsed();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.source, ArticleSource::Simulator);
    assert!(elapsed >= Duration::from_secs(5));
    assert!(elapsed < Duration::from_secs(3600));
}

#[tokio::test(start_paused = true)]
async fn simulator_latency_is_applied() {
    let mut config = disabled_config();
    config.simulator.latency_ms = 600;
    let generator = ArticleGenerator::new(&config);

    let started = tokio::time::Instant::now();
    let payload = generator.generate_article(&probiotics_request()).await;

    assert!(started.elapsed() >= Duration::from_millis(600));
    assert_eq!(payload.faqs.len(), 3);
}

#[tokio::test]
async fn short_faq_list_is_topped_up() {
    let (provider, _calls) = ScriptedProvider::boxed(Script::Reply(article_reply(
        "Kefir Handbook",
        "kefir",
        1,
    )));
    let generator = ArticleGenerator::with_provider(&enabled_config(), provider);
    let request = GenerationRequest::new("kefir", "Kefir Handbook", ArticleType::Pillar).unwrap();

    let outcome = generator.generate(&request).await;

    assert_eq!(outcome.source, ArticleSource::External);
    assert_eq!(outcome.payload.faqs.len(), 5);
    assert_eq!(
        outcome.payload.faqs[0].question,
        "Provider question 1 about kefir?"
    );
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let generator = ArticleGenerator::new(&disabled_config());
    let kefir = GenerationRequest::new("kefir", "Kefir", ArticleType::Pillar).unwrap();
    let fiber = GenerationRequest::new("fiber", "Fiber", ArticleType::Supporting).unwrap();

    let (a, b) = tokio::join!(generator.generate(&kefir), generator.generate(&fiber));

    assert_eq!(a.payload.json_ld["keywords"], "kefir");
    assert_eq!(a.payload.faqs.len(), 5);
    assert_eq!(b.payload.json_ld["keywords"], "fiber");
    assert_eq!(b.payload.faqs.len(), 3);
}

#[tokio::test]
async fn gemini_round_trip_through_local_server() {
    let text = article_reply("Live Title", "probiotics", 3);
    let (endpoint, server) = serve_once(200, gemini_envelope(&text)).await;

    let mut config = enabled_config();
    config.provider.endpoint = Some(endpoint);
    let generator = ArticleGenerator::new(&config);
    assert!(generator.provider_status().has_endpoint);

    let outcome = generator.generate(&probiotics_request()).await;
    let request = server.await.unwrap();

    assert_eq!(outcome.source, ArticleSource::External);
    assert_eq!(outcome.payload.title, "Live Title");
    assert!(request.contains("probiotics"));
}

#[tokio::test]
async fn gemini_server_error_falls_back() {
    let (endpoint, server) = serve_once(500, "{\"error\":\"boom\"}".to_string()).await;

    let mut config = enabled_config();
    config.provider.endpoint = Some(endpoint);
    let generator = ArticleGenerator::new(&config);

    let outcome = generator.generate(&probiotics_request()).await;
    server.await.unwrap();

    assert_eq!(outcome.source, ArticleSource::Simulator);
    assert_eq!(outcome.payload.faqs.len(), 3);
}
