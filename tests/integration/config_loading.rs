//! Layered configuration loading

use seo_writer::config::ConfigLoader;
use seo_writer::error::ApiError;
use seo_writer::orchestrator::ArticleGenerator;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_environment_disables_provider() {
    let config = ConfigLoader::load_with_env(None, &HashMap::new()).unwrap();
    let generator = ArticleGenerator::new(&config);
    let status = generator.provider_status();

    assert!(!status.enabled);
    assert_eq!(status.status, "not configured");
    assert!(!status.api_key_configured);
    assert!(!status.has_endpoint);
}

#[test]
fn key_without_selector_is_not_enough() {
    let config =
        ConfigLoader::load_with_env(None, &env(&[("AI_API_KEY", "secret")])).unwrap();
    let status = ArticleGenerator::new(&config).provider_status();

    assert!(!status.enabled);
    assert!(status.api_key_configured);
}

#[test]
fn environment_enables_provider() {
    let config = ConfigLoader::load_with_env(
        None,
        &env(&[
            ("AI_API_KEY", "secret"),
            ("AI_API_PROVIDER", "Gemini"),
            ("AI_ENDPOINT", "http://localhost:9999/v1beta/models"),
        ]),
    )
    .unwrap();
    let status = ArticleGenerator::new(&config).provider_status();

    assert!(status.enabled);
    assert_eq!(status.status, "ready");
    assert_eq!(status.provider.as_deref(), Some("Gemini"));
    assert!(status.has_endpoint);
}

#[test]
fn environment_overrides_file() {
    let file = toml_file(
        "[provider]\napi_key = \"file-key\"\nselector = \"gemini\"\nmodel = \"file-model\"\n\n[simulator]\nlatency_ms = 250\n",
    );
    let config = ConfigLoader::load_with_env(
        Some(file.path()),
        &env(&[("AI_MODEL", "env-model"), ("SIMULATOR_LATENCY_MS", "0")]),
    )
    .unwrap();

    assert_eq!(config.provider.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.provider.model, "env-model");
    assert_eq!(config.simulator.latency_ms, 0);
    assert!(config.provider.is_enabled());
}

#[test]
fn file_logging_section_is_read() {
    let file = toml_file("[logging]\nlevel = \"debug\"\nformat = \"json\"\n");
    let config = ConfigLoader::load_with_env(Some(file.path()), &HashMap::new()).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn invalid_values_are_rejected() {
    let err = ConfigLoader::load_with_env(None, &env(&[("AI_TIMEOUT_SECS", "soon")]));
    assert!(matches!(err, Err(ApiError::ConfigError(_))));

    let err = ConfigLoader::load_with_env(None, &env(&[("AI_ENDPOINT", "ftp://example.com")]));
    assert!(matches!(err, Err(ApiError::ConfigError(_))));

    let missing = std::path::Path::new("/definitely/not/here/seo-writer.toml");
    assert!(ConfigLoader::load_with_env(Some(missing), &HashMap::new()).is_err());
}
