//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::HunkError;
use crate::locale::Locale;
use crate::test_support::create_test_repo;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.log_depth, 10);
    assert_eq!(config.language, None);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
log_depth: 25
language: ja
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.log_depth, 25);
    assert_eq!(config.language, Some(Locale::Ja));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
log_depth: 3
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.log_depth, 3);
}

#[test]
fn test_zero_log_depth_is_rejected() {
    let err = Config::from_yaml("log_depth: 0").unwrap_err();
    assert!(matches!(err, HunkError::UserError(_)));
    assert!(err.to_string().contains("log_depth"));
}

#[test]
fn test_unknown_language_is_rejected() {
    let err = Config::from_yaml("language: fr").unwrap_err();
    assert!(matches!(err, HunkError::UserError(_)));
}

#[test]
fn test_discover_outside_repo_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::discover(temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_repo_without_file_uses_defaults() {
    let repo = create_test_repo();
    let config = Config::discover(repo.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_reads_file_from_repo_root() {
    let repo = create_test_repo();
    std::fs::write(repo.path().join(CONFIG_FILE_NAME), "log_depth: 4\nlanguage: ko\n").unwrap();
    let subdir = repo.path().join("nested");
    std::fs::create_dir_all(&subdir).unwrap();

    let config = Config::discover(&subdir).unwrap();

    assert_eq!(config.log_depth, 4);
    assert_eq!(config.language, Some(Locale::Ko));
}

#[test]
fn test_discover_invalid_file_is_error() {
    let repo = create_test_repo();
    std::fs::write(repo.path().join(CONFIG_FILE_NAME), "log_depth: [not a number").unwrap();

    let err = Config::discover(repo.path()).unwrap_err();
    assert!(matches!(err, HunkError::UserError(_)));
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
