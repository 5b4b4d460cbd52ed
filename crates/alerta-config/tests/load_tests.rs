//! Loading configuration from disk.

use std::fs;

use alerta_config::{AlertaConfig, MapLayer, StartView, default_config_path};
use alerta_core::{AlertaError, Coordinate};
use serial_test::serial;
use tempfile::TempDir;

fn set_home(dir: &TempDir) {
    // SAFETY: every test touching HOME is #[serial]
    unsafe { std::env::set_var("HOME", dir.path()) };
}

#[test]
#[serial]
fn missing_default_file_yields_defaults() {
    let home = TempDir::new().unwrap();
    set_home(&home);

    let config = AlertaConfig::load(None).unwrap();
    assert_eq!(config, AlertaConfig::default());
}

#[test]
#[serial]
fn default_file_is_read_when_present() {
    let home = TempDir::new().unwrap();
    set_home(&home);

    let path = default_config_path().unwrap();
    assert!(path.starts_with(home.path()));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "ui:\n  start_view: list\n").unwrap();

    let config = AlertaConfig::load(None).unwrap();
    assert_eq!(config.ui.start_view, StartView::List);
}

#[test]
fn explicit_file_overrides_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alerta.yaml");
    fs::write(
        &path,
        "map:\n  center: { latitude: 6.2442, longitude: -75.5812 }\n  layer: satellite\n",
    )
    .unwrap();

    let config = AlertaConfig::load(Some(&path)).unwrap();
    assert_eq!(config.map.center, Coordinate::new(6.2442, -75.5812));
    assert_eq!(config.map.layer, MapLayer::Satellite);
}

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = AlertaConfig::load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
    assert!(matches!(err, AlertaError::ConfigNotFound { .. }));
    assert!(err.guidance().is_some());
}

#[test]
fn invalid_values_fail_validation_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alerta.yaml");
    fs::write(&path, "map:\n  latitude_delta: -1.0\n").unwrap();

    let err = AlertaConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, AlertaError::ConfigValidation { .. }));
}

#[test]
fn malformed_yaml_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alerta.yaml");
    fs::write(&path, "map: [unclosed\n").unwrap();

    let err = AlertaConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, AlertaError::ConfigInvalid { .. }));
}
