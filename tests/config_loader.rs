use civictrack::config::{Config, ConfigError, UploadConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.upload, UploadConfig::default());
    assert!(config.api.connect_timeout_seconds.is_none());
    assert!(config.api.user_agent.starts_with("civictrack/"));
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("civictrack/config.toml"));
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://tracker.example.gov/api/v1"
connect_timeout_seconds = 5

[upload]
upload_url = "https://images.example.com/v1/upload"
destroy_url = "https://images.example.com/v1/destroy"
upload_preset = "projects"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.connect_timeout_seconds, Some(5));
    assert_eq!(config.upload.upload_preset, "projects");
    assert!(config.upload.is_configured());
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config("[upload]\nupload_preset = \"p\"\n");

    let config = Config::load_from(&path).unwrap();
    assert!(config.api.base_url.starts_with("http"));
    assert!(!config.upload.is_configured());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn invalid_upload_url_fails_validation() {
    let (_dir, path) = write_config("[upload]\nupload_url = \"images.example.com\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("upload.upload_url"));
}
