//! Config file source: an explicit TOML file passed by the caller.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Add the config file to the builder. A path that was asked for must exist.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let path_str = path
        .to_str()
        .ok_or_else(|| ConfigError::Message(format!("Non UTF-8 config path: {:?}", path)))?;

    debug!(config_path = %path.display(), "Loading configuration file");
    Ok(builder.add_source(File::new(path_str, FileFormat::Toml).required(true)))
}
