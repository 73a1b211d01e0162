use std::path::{Path, PathBuf};

use lenticular_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::toml_writer::write_replacing;

const APP_DIR: &str = "lenticular";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/lenticular/config.toml`.
///
/// On Linux this is `~/.config/lenticular/config.toml`, on macOS
/// `~/Library/Application Support/lenticular/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match dirs::config_dir() {
        Some(base) => Ok(base.join(APP_DIR).join(FILE_NAME)),
        None => Err(ConfigError::ParseError(
            "no platform config directory for this user".into(),
        )),
    }
}

/// Write the commented default template to `path`, creating parent
/// directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_replacing(path, default_config_toml().as_bytes()).map_err(|source| {
        ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("wrote default config to {}", path.display());
    Ok(())
}
