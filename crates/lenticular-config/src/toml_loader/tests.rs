use super::loader::parse;
use super::template::default_config_toml;
use super::*;
use crate::schema::LenticularConfig;
use lenticular_common::ConfigError;
use std::path::Path;

fn write_config(body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let err = load_from_path(Path::new("/tmp/lenticular_no_such_dir/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let (_dir, path) = write_config(
        "[material]\ndivisions = 30\nridge_height = 0.1\n\n[carousel]\nslice_count = 5\nauto_rotate = true\n",
    );
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.material.divisions, 30);
    assert!((config.material.ridge_height - 0.1).abs() < 1e-12);
    assert_eq!(config.carousel.slice_count, 5);
    assert!(config.carousel.auto_rotate);
    assert!((config.material.edge_smoothness - 0.1).abs() < 1e-12);
    assert_eq!(config.textures.active, "nostalgia");
}

#[test]
fn malformed_toml_names_the_file() {
    let (_dir, path) = write_config("divisions = = 3");
    match load_from_path(&path).unwrap_err() {
        ConfigError::ParseError(msg) => assert!(msg.contains("config.toml"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_values_still_load() {
    let (_dir, path) = write_config("[material]\ndivisions = 0\n");
    assert_eq!(load_from_path(&path).unwrap().material.divisions, 0);
}

#[test]
fn created_default_file_loads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert_eq!(load_from_path(&path).unwrap(), LenticularConfig::default());
}

#[test]
fn template_parses_and_validates() {
    let config = parse(default_config_toml(), Path::new("template")).unwrap();
    assert_eq!(config.textures.sets.len(), 3);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_path_ends_in_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("lenticular/config.toml"));
    }
}
