use modsel_core::config::{ModselConfig, DEFAULT_MAX_WORKERS};
use tempfile::TempDir;

#[test]
fn test_defaults_from_empty_toml() {
    let config = ModselConfig::parse_toml("").unwrap();
    assert_eq!(config.resolver.max_workers, DEFAULT_MAX_WORKERS);
    assert!(config.resolver.parallel_passes);
}

#[test]
fn test_default_matches_empty_toml() {
    let config = ModselConfig::default();
    assert_eq!(config.resolver.max_workers, 10);
    assert!(config.resolver.parallel_passes);
}

#[test]
fn test_parse_resolver_section() {
    let config = ModselConfig::parse_toml(
        r#"
[resolver]
max-workers = 4
parallel-passes = false
"#,
    )
    .unwrap();
    assert_eq!(config.resolver.max_workers, 4);
    assert!(!config.resolver.parallel_passes);
}

#[test]
fn test_worker_count_is_bounded_by_eligible_roots() {
    let config = ModselConfig::default();
    assert_eq!(config.resolver.worker_count(3), 3);
    assert_eq!(config.resolver.worker_count(5000), 10);
    assert_eq!(config.resolver.worker_count(0), 1);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = ModselConfig::parse_toml("[resolver]\nmax-workers = \"many\"").unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn test_load_from_file_and_missing_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("modsel.toml");
    std::fs::write(&path, "[resolver]\nmax-workers = 2\n").unwrap();

    let config = ModselConfig::load(&path).unwrap();
    assert_eq!(config.resolver.max_workers, 2);

    let defaults = ModselConfig::load_or_default(None).unwrap();
    assert_eq!(defaults.resolver.max_workers, 10);

    assert!(ModselConfig::load(&tmp.path().join("missing.toml")).is_err());
}
