//! Tests for the config module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;
use test_case::test_case;

fn full_env() -> HashMap<String, String> {
    [
        (ENV_HOST, "https://mainframe.example.com"),
        (ENV_PORT, "443"),
        (ENV_USERNAME, "IBMUSER"),
        (ENV_PASSWORD, "SYS1"),
        (ENV_BASE_PATH, "/zosmf"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn lookup(env: HashMap<String, String>) -> impl Fn(&str) -> Option<String> {
    move |key| env.get(key).cloned()
}

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

const FILE_CONFIG: &str = r#"{
    "host": "https://file.example.com",
    "port": 10443,
    "username": "FILEUSER",
    "password": "secret",
    "basePath": "/zosmf",
    "insecure": true
}"#;

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_builds_valid_profile() {
    let profile = ConnectionProfile::builder()
        .host("https://mainframe.example.com")
        .port(443)
        .credentials("IBMUSER", "SYS1")
        .base_path("/zosmf")
        .insecure(true)
        .build()
        .unwrap();

    assert_eq!(profile.host(), "https://mainframe.example.com");
    assert_eq!(profile.port(), 443);
    assert_eq!(profile.username(), "IBMUSER");
    assert_eq!(profile.password(), "SYS1");
    assert_eq!(profile.base_path(), "/zosmf");
    assert!(profile.insecure());
    assert!(profile.http_client().is_none());
}

#[test]
fn test_builder_rejects_missing_fields() {
    let err = ConnectionProfile::builder()
        .port(443)
        .credentials("IBMUSER", "SYS1")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { field } if field == "host"));

    let err = ConnectionProfile::builder()
        .host("https://mainframe.example.com")
        .port(443)
        .credentials("IBMUSER", "")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { field } if field == "password"));
}

#[test]
fn test_builder_keeps_http_client_override() {
    let profile = ConnectionProfile::builder()
        .host("https://mainframe.example.com")
        .port(443)
        .credentials("IBMUSER", "SYS1")
        .http_client(reqwest::Client::new())
        .build()
        .unwrap();
    assert!(profile.http_client().is_some());
}

#[test]
fn test_debug_redacts_password() {
    let profile = ConnectionProfile::builder()
        .host("https://mainframe.example.com")
        .port(443)
        .credentials("IBMUSER", "topsecret")
        .build()
        .unwrap();

    let debug = format!("{profile:?}");
    assert!(debug.contains("IBMUSER"));
    assert!(!debug.contains("topsecret"));
    assert_eq!(profile.redacted()["password"], "********");
}

#[test]
fn test_serialized_keys_are_camel_case() {
    let profile = ConnectionProfile::builder()
        .host("https://mainframe.example.com")
        .port(443)
        .credentials("IBMUSER", "SYS1")
        .base_path("/zosmf")
        .http_client(reqwest::Client::new())
        .build()
        .unwrap();

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["basePath"], "/zosmf");
    assert_eq!(value["insecure"], false);
    assert!(value.get("httpClient").is_none());
    assert!(value.get("http_client").is_none());
}

// ============================================================================
// Environment source
// ============================================================================

#[test]
fn test_from_env_full() {
    let profile = ConnectionProfile::from_env_with(lookup(full_env())).unwrap();

    assert_eq!(profile.host(), "https://mainframe.example.com");
    assert_eq!(profile.port(), 443);
    assert_eq!(profile.username(), "IBMUSER");
    assert_eq!(profile.password(), "SYS1");
    assert_eq!(profile.base_path(), "/zosmf");
    assert!(!profile.insecure());
}

#[test]
fn test_from_env_optional_fields_default() {
    let mut env = full_env();
    env.remove(ENV_BASE_PATH);

    let profile = ConnectionProfile::from_env_with(lookup(env)).unwrap();
    assert_eq!(profile.base_path(), "");
    assert!(!profile.insecure());
}

#[test_case(ENV_HOST ; "host")]
#[test_case(ENV_PORT ; "port")]
#[test_case(ENV_USERNAME ; "username")]
#[test_case(ENV_PASSWORD ; "password")]
fn test_from_env_missing_required(var: &str) {
    let mut env = full_env();
    env.remove(var);

    let err = ConnectionProfile::from_env_with(lookup(env)).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { ref field } if field == var));
}

#[test_case(ENV_HOST ; "host")]
#[test_case(ENV_PORT ; "port")]
#[test_case(ENV_USERNAME ; "username")]
#[test_case(ENV_PASSWORD ; "password")]
fn test_from_env_empty_required(var: &str) {
    let mut env = full_env();
    env.insert(var.to_string(), String::new());

    let err = ConnectionProfile::from_env_with(lookup(env)).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { .. }));
}

#[test]
fn test_from_env_non_numeric_port() {
    let mut env = full_env();
    env.insert(ENV_PORT.to_string(), "abc".to_string());

    let err = ConnectionProfile::from_env_with(lookup(env)).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { ref field, .. } if field == ENV_PORT));
}

#[test]
fn test_from_env_port_zero_is_accepted() {
    let mut env = full_env();
    env.insert(ENV_PORT.to_string(), "0".to_string());

    let profile = ConnectionProfile::from_env_with(lookup(env)).unwrap();
    assert_eq!(profile.port(), 0);
}

#[test]
fn test_from_env_out_of_range_port() {
    let mut env = full_env();
    env.insert(ENV_PORT.to_string(), "70000".to_string());

    let err = ConnectionProfile::from_env_with(lookup(env)).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { ref field, .. } if field == ENV_PORT));
}

#[test_case("true", true ; "literal true")]
#[test_case("1", true ; "literal one")]
#[test_case("", false ; "empty")]
#[test_case("false", false ; "literal false")]
#[test_case("yes", false ; "yes")]
fn test_from_env_insecure_flag(value: &str, expected: bool) {
    let mut env = full_env();
    env.insert(ENV_INSECURE.to_string(), value.to_string());

    let profile = ConnectionProfile::from_env_with(lookup(env)).unwrap();
    assert_eq!(profile.insecure(), expected);
}

// ============================================================================
// File source
// ============================================================================

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    write_config(&path, FILE_CONFIG);

    let profile = ConnectionProfile::from_file(&path).unwrap();
    assert_eq!(profile.host(), "https://file.example.com");
    assert_eq!(profile.port(), 10443);
    assert_eq!(profile.username(), "FILEUSER");
    assert_eq!(profile.password(), "secret");
    assert_eq!(profile.base_path(), "/zosmf");
    assert!(profile.insecure());
}

#[test]
fn test_from_file_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    write_config(
        &path,
        r#"{"host": "https://h", "port": 443, "username": "u", "password": "p"}"#,
    );

    let profile = ConnectionProfile::from_file(&path).unwrap();
    assert_eq!(profile.base_path(), "");
    assert!(!profile.insecure());
}

#[test]
fn test_from_file_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConnectionProfile::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_from_file_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    write_config(&path, "{ not json");

    let err = ConnectionProfile::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigFile { .. }));
    assert!(err.is_configuration());
}

#[test_case(r#"{"port": 443, "username": "u", "password": "p"}"#, "host" ; "host absent")]
#[test_case(r#"{"host": "", "port": 443, "username": "u", "password": "p"}"#, "host" ; "host empty")]
#[test_case(r#"{"host": "https://h", "username": "u", "password": "p"}"#, "port" ; "port absent")]
#[test_case(r#"{"host": "https://h", "port": 443, "password": "p"}"#, "username" ; "username absent")]
#[test_case(r#"{"host": "https://h", "port": 443, "username": "u"}"#, "password" ; "password absent")]
fn test_from_file_missing_or_empty_field(contents: &str, expected: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    write_config(&path, contents);

    let err = ConnectionProfile::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { ref field } if field == expected));
}

#[test]
fn test_from_file_port_zero_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    write_config(
        &path,
        r#"{"host": "https://h", "port": 0, "username": "u", "password": "p"}"#,
    );

    let profile = ConnectionProfile::from_file(&path).unwrap();
    assert_eq!(profile.port(), 0);
}

// ============================================================================
// Default-path source
// ============================================================================

#[test]
fn test_default_paths_prefers_config_dir() {
    let home = TempDir::new().unwrap();
    let paths = default_config_paths(home.path());
    write_config(&paths[0], FILE_CONFIG);
    write_config(
        &paths[1],
        r#"{"host": "https://flat", "port": 1, "username": "u", "password": "p"}"#,
    );

    let profile = ConnectionProfile::from_default_paths_in(Some(home.path())).unwrap();
    assert_eq!(profile.host(), "https://file.example.com");
}

#[test]
fn test_default_paths_falls_back_to_flat_file() {
    let home = TempDir::new().unwrap();
    let paths = default_config_paths(home.path());
    write_config(&paths[1], FILE_CONFIG);

    let profile = ConnectionProfile::from_default_paths_in(Some(home.path())).unwrap();
    assert_eq!(profile.username(), "FILEUSER");
}

#[test]
fn test_default_paths_none_exist() {
    let home = TempDir::new().unwrap();
    let err = ConnectionProfile::from_default_paths_in(Some(home.path())).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_default_paths_without_home() {
    let err = ConnectionProfile::from_default_paths_in(None).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_default_paths_decode_error_is_not_masked() {
    let home = TempDir::new().unwrap();
    let paths = default_config_paths(home.path());
    write_config(&paths[0], "[]");
    write_config(&paths[1], FILE_CONFIG);

    let err = ConnectionProfile::from_default_paths_in(Some(home.path())).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigFile { .. }));
    assert!(err.is_configuration());
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_load_prefers_environment() {
    let home = TempDir::new().unwrap();
    write_config(&default_config_paths(home.path())[0], FILE_CONFIG);

    let profile = ConnectionProfile::load_with(lookup(full_env()), Some(home.path())).unwrap();
    assert_eq!(profile.host(), "https://mainframe.example.com");
    assert_eq!(profile.username(), "IBMUSER");
}

#[test_case(ENV_HOST ; "host")]
#[test_case(ENV_PORT ; "port")]
#[test_case(ENV_USERNAME ; "username")]
#[test_case(ENV_PASSWORD ; "password")]
fn test_load_falls_through_to_file(var: &str) {
    let home = TempDir::new().unwrap();
    write_config(&default_config_paths(home.path())[1], FILE_CONFIG);

    let mut env = full_env();
    env.remove(var);

    let profile = ConnectionProfile::load_with(lookup(env), Some(home.path())).unwrap();
    let expected = ConnectionProfile::from_file(&default_config_paths(home.path())[1]).unwrap();
    assert_eq!(profile, expected);
}

#[test]
fn test_load_invalid_port_falls_through_without_merging() {
    let home = TempDir::new().unwrap();
    write_config(&default_config_paths(home.path())[0], FILE_CONFIG);

    let mut env = full_env();
    env.insert(ENV_PORT.to_string(), "abc".to_string());

    let profile = ConnectionProfile::load_with(lookup(env), Some(home.path())).unwrap();
    assert_eq!(profile.host(), "https://file.example.com");
    assert_eq!(profile.username(), "FILEUSER");
}

#[test]
fn test_load_nothing_available() {
    let home = TempDir::new().unwrap();

    let err = ConnectionProfile::load_with(lookup(HashMap::new()), Some(home.path())).unwrap_err();
    match err {
        Error::ConfigurationUnavailable { env, files } => {
            assert!(matches!(*env, Error::MissingRequiredField { .. }));
            assert!(matches!(*files, Error::NotFound { .. }));
        }
        other => panic!("expected ConfigurationUnavailable, got {other:?}"),
    }
}
