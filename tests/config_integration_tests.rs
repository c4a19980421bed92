//! Tests for configuration file loading and discovery
use std::fs;

use clap::Parser;
use rut_validator::config::{Args, Config, OutputFormat, PROJECT_CONFIG_FILE};
use tempfile::TempDir;

const PROJECT_CONFIG: &str = r#"
[form]
required = ["nombre_completo", "rut"]
rut_fields = ["rut", "rut_empresa"]

[messages]
required = "Campo requerido"
"#;

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("hostal.toml");
    fs::write(&path, PROJECT_CONFIG).expect("write config");

    let args = Args::try_parse_from([
        "rut-check",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--format",
        "json",
        "check",
        "12345678-5",
    ])
    .expect("parse args");
    let config = Config::from_args(&args).expect("create config");

    assert!(config.has_project_config());
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.form.required, vec!["nombre_completo", "rut"]);
    assert_eq!(config.form.rut_fields, vec!["rut", "rut_empresa"]);
    assert_eq!(config.messages.required, "Campo requerido");
    assert_eq!(config.messages.invalid_rut, "RUT inválido. Formato: 12345678-9");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let args = Args::try_parse_from([
        "rut-check",
        "--config",
        path.to_str().expect("utf-8 path"),
        "check",
        "12345678-5",
    ])
    .expect("parse args");
    let err = Config::from_args(&args).expect_err("missing file must fail");
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[form\nrequired = 3").expect("write config");

    let err = Config::load_project_config(&path).expect_err("malformed file must fail");
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_wrong_value_type_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("typed.toml");
    fs::write(&path, "[form]\nrut_fields = \"rut\"").expect("write config");

    assert!(Config::load_project_config(&path).is_err());
}

#[test]
fn test_project_file_discovered_in_directory() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), PROJECT_CONFIG).expect("write config");

    let found = Config::discover_config_file(dir.path()).expect("config discovered");
    assert_eq!(found, dir.path().join(PROJECT_CONFIG_FILE));

    let project = Config::load_project_config(&found).expect("load config");
    assert!(project.form.is_rut_field("rut_empresa"));
}
