//! Environment source.
//!
//! Reads from an explicit variable map rather than the process environment so
//! callers and tests decide what the pipeline sees.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use std::collections::HashMap;

pub const AI_API_KEY: &str = "AI_API_KEY";
pub const AI_API_PROVIDER: &str = "AI_API_PROVIDER";
pub const AI_ENDPOINT: &str = "AI_ENDPOINT";
pub const AI_MODEL: &str = "AI_MODEL";
pub const AI_TIMEOUT_SECS: &str = "AI_TIMEOUT_SECS";
pub const SIMULATOR_LATENCY_MS: &str = "SIMULATOR_LATENCY_MS";

const STRING_KEYS: [(&str, &str); 4] = [
    (AI_API_KEY, "provider.api_key"),
    (AI_API_PROVIDER, "provider.selector"),
    (AI_ENDPOINT, "provider.endpoint"),
    (AI_MODEL, "provider.model"),
];

const INTEGER_KEYS: [(&str, &str); 2] = [
    (AI_TIMEOUT_SECS, "provider.timeout_secs"),
    (SIMULATOR_LATENCY_MS, "simulator.latency_ms"),
];

/// Snapshot the process environment. Done once, at startup.
pub fn process_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Apply recognised variables as overrides. Blank values are ignored.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    env: &HashMap<String, String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, key) in STRING_KEYS {
        if let Some(value) = non_blank(env, var) {
            builder = builder.set_override(key, value)?;
        }
    }

    for (var, key) in INTEGER_KEYS {
        if let Some(value) = non_blank(env, var) {
            let parsed: i64 = value.parse().map_err(|_| {
                ConfigError::Message(format!("{} must be a non-negative integer, got '{}'", var, value))
            })?;
            if parsed < 0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a non-negative integer, got '{}'",
                    var, value
                )));
            }
            builder = builder.set_override(key, parsed)?;
        }
    }

    Ok(builder)
}

fn non_blank<'a>(env: &'a HashMap<String, String>, var: &str) -> Option<&'a str> {
    env.get(var).map(|v| v.trim()).filter(|v| !v.is_empty())
}
