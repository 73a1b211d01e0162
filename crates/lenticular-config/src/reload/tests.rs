use super::*;
use crate::schema::LenticularConfig;
use std::path::PathBuf;
use tokio::sync::watch;

fn write(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_lenticular_reload_test.toml");
    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config, LenticularConfig::default());
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[material]\ndivisions = 20\n");

    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config.material.divisions, 20);
    assert_eq!(rx.borrow().material.divisions, 20);
}

#[tokio::test]
async fn start_with_invalid_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[material]\nedge_smoothness = 3.0\n");

    let (config, _rx) = ReloadManager::start(path).await;
    assert!((config.material.edge_smoothness - 0.1).abs() < 1e-12);
}

#[test]
fn load_validated_rejects_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[carousel]\nslice_count = 0\n");
    assert!(load_validated(&path).is_err());
}

#[test]
fn refresh_publishes_valid_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[material]\nridge_height = 0.12\n");
    let (tx, rx) = watch::channel(LenticularConfig::default());
    let mut manager = ReloadManager::for_test(path, LenticularConfig::default());

    assert!(manager.refresh(&tx));
    assert!((rx.borrow().material.ridge_height - 0.12).abs() < 1e-12);
}

#[test]
fn refresh_skips_unchanged_and_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "");
    let (tx, mut rx) = watch::channel(LenticularConfig::default());
    let mut manager = ReloadManager::for_test(path.clone(), LenticularConfig::default());

    // Empty file parses to defaults: nothing new.
    assert!(!manager.refresh(&tx));
    std::fs::write(&path, "[material]\ndivisions = 0\n").unwrap();
    assert!(!manager.refresh(&tx));
    assert!(!rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().material.divisions, 10);
}
