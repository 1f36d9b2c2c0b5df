//! Merge rules: defaults, override order, conflict handling.
//!
//! Order (lowest to highest): defaults, config file, environment.

use crate::provider::gemini::DEFAULT_MODEL;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_TIMEOUT_SECS: i64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: i64 = 10;
pub const DEFAULT_SIMULATOR_LATENCY_MS: i64 = 600;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.model", DEFAULT_MODEL)?
        .set_default("provider.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("provider.connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)?
        .set_default("simulator.latency_ms", DEFAULT_SIMULATOR_LATENCY_MS)
}
