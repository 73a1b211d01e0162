//! Configuration for the lenticular viewer.
//!
//! `config.toml` holds the material, carousel, parallax, plane, camera,
//! texture and logging sections. Every field has a default, so a file only
//! needs the values it changes. [`ReloadManager`] republishes the file when a
//! valid edit lands.
//!
//! ```rust,no_run
//! let config = lenticular_config::load_config().expect("config");
//! println!("{}", lenticular_config::config_to_json(&config).expect("json"));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{LenticularConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{config_to_toml, save_config_to_path};
pub use watcher::ConfigWatcher;

use lenticular_common::ConfigError;

/// Load the config at the platform default path, creating it if missing,
/// and reject it if any value is out of range.
pub fn load_config() -> Result<LenticularConfig, ConfigError> {
    toml_loader::load_default().and_then(|config| {
        validation::validate(&config)?;
        Ok(config)
    })
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<LenticularConfig, ConfigError> {
    reload::load_validated(path)
}

/// Pretty-printed JSON of the effective config.
pub fn config_to_json(config: &LenticularConfig) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&LenticularConfig::default()).unwrap();
        for section in [
            "\"material\"",
            "\"carousel\"",
            "\"parallax\"",
            "\"plane\"",
            "\"camera\"",
            "\"textures\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = LenticularConfig::default();
        let json = config_to_json(&config).unwrap();
        let parsed: LenticularConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[material]\nedge_smoothness = 2.0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
