//! Write a `LenticularConfig` back to disk as TOML.

use std::io;
use std::path::Path;

use lenticular_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::{LenticularConfig, CONFIG_SCHEMA_VERSION};

/// Render `config` as TOML with a one-line header naming the schema version.
pub fn config_to_toml(config: &LenticularConfig) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
    Ok(format!("# lenticular config (schema v{CONFIG_SCHEMA_VERSION})\n\n{body}"))
}

/// Save `config` at `path`, creating missing parent directories.
pub fn save_config_to_path(config: &LenticularConfig, path: &Path) -> Result<(), ConfigError> {
    let text = config_to_toml(config)?;
    write_replacing(path, text.as_bytes()).map_err(|source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "config saved");
    Ok(())
}

/// Stage the bytes in a `.toml.tmp` sibling and rename it over `path`, so
/// readers never observe a half-written file. Falls back to an in-place
/// write where rename over an existing file is refused.
pub(crate) fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let staged = path.with_extension("toml.tmp");
    std::fs::write(&staged, bytes)?;
    std::fs::rename(&staged, path).or_else(|e| {
        warn!("rename of {} failed ({e}); writing in place", staged.display());
        let _ = std::fs::remove_file(&staged);
        std::fs::write(path, bytes)
    })
}
