//! Configuration discovery across directory ancestors

use sat32::config::{load_config_file, load_config_from, CONFIG_FILE_NAME};
use sat32::{OutputStyle, Sat32Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn finds_config_in_ancestor_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[output]\nstyle = \"json\"\n",
    )
    .unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.style(), OutputStyle::Json);
    assert!(!config.hex_prefix());
}

#[test]
fn nearest_config_wins() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("inner");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[output]\nhex_prefix = false\n",
    )
    .unwrap();
    fs::write(nested.join(CONFIG_FILE_NAME), "[output]\nhex_prefix = true\n").unwrap();

    assert!(load_config_from(nested).hex_prefix());
}

#[test]
fn invalid_discovered_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

    let config = load_config_from(temp_dir.path().to_path_buf());
    assert!(!config.hex_prefix());
    assert_eq!(config.style(), OutputStyle::Plain);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");
    let err = load_config_file(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.toml"));
}

#[test]
fn explicit_config_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[output]\nhex_prefix = true\nstyle = \"plain\"\n").unwrap();

    let config: Sat32Config = load_config_file(&path).unwrap();
    assert!(config.hex_prefix());
    assert_eq!(config.style(), OutputStyle::Plain);
}
