use std::path::Path;

use lenticular_common::ConfigError;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::LenticularConfig;
use crate::validation;

/// Parse TOML text. Absent sections and fields take their defaults.
pub(crate) fn parse(source: &str, origin: &Path) -> Result<LenticularConfig, ConfigError> {
    toml::from_str(source)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", origin.display())))
}

/// Read and parse the config at `path`.
///
/// Out-of-range values are only logged here; the parsed config is returned
/// unchanged and callers needing a valid config call [`validation::validate`].
pub fn load_from_path(path: &Path) -> Result<LenticularConfig, ConfigError> {
    let source = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse(&source, path)?;
    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}", path.display());
    }
    debug!("parsed {} bytes of config", source.len());
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the config at the platform default path, writing the default
/// template there first if no file exists.
pub fn load_default() -> Result<LenticularConfig, ConfigError> {
    let path = default_config_path()?;
    load_from_path(&path).or_else(|e| match e {
        ConfigError::FileNotFound(_) => {
            create_default_config(&path)?;
            Ok(LenticularConfig::default())
        }
        other => Err(other),
    })
}
