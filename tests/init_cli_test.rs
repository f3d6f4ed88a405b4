//! Tests for `gantry init` command.

mod support;
use std::fs;
use support::*;

#[test]
fn test_init_creates_config() {
    let t = Test::new();

    let output = t.init_cmd("acme", "api", "dev,prod");
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("initialized"));

    let config_path = t.dir.path().join(".gantry.toml");
    assert!(config_path.exists(), ".gantry.toml should exist");

    let config_content = fs::read_to_string(config_path).unwrap();
    assert!(config_content.contains("version"));
    assert!(config_content.contains("namespace = \"acme\""));
    assert!(config_content.contains("[services.api.database]"));
    assert!(config_content.contains("default_service = \"api\""));
}

#[test]
fn test_init_in_already_initialized_dir_fails() {
    let t = Test::new();

    let output = t.init_cmd("acme", "api", "dev,prod");
    assert_success(&output);

    // Second init should fail gracefully
    let output = t.init_cmd("acme", "api", "dev,prod");
    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("already initialized"));
}

#[test]
fn test_init_defaults() {
    let t = Test::new();

    let output = t.cmd().arg("init").output().unwrap();
    assert_success(&output);

    let config_content = fs::read_to_string(t.dir.path().join(".gantry.toml")).unwrap();
    assert!(config_content.contains("namespace = \"gantry\""));
    assert!(config_content.contains("\"dev\""));
    assert!(config_content.contains("\"prod\""));
}

#[test]
fn test_init_detects_service_from_directory_name() {
    let t = Test::new();
    let project = t.dir.path().join("checkout");
    fs::create_dir(&project).unwrap();

    let output = t.cmd().current_dir(&project).arg("init").output().unwrap();
    assert_success(&output);

    let config_content = fs::read_to_string(project.join(".gantry.toml")).unwrap();
    assert!(config_content.contains("default_service = \"checkout\""));
    assert!(config_content.contains("[services.checkout.database]"));
}

#[test]
fn test_init_with_custom_engine() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "init", "-n", "acme", "-s", "api", "-e", "dev", "--engine", "postgres",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let config_content = fs::read_to_string(t.dir.path().join(".gantry.toml")).unwrap();
    assert!(config_content.contains("engine = \"postgres\""));
}

#[test]
fn test_init_rejects_separator_in_namespace() {
    let t = Test::new();

    let output = t.init_cmd("ac-me", "api", "dev,prod");
    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("reserved"), "unexpected stderr: {}", err);

    assert!(!t.dir.path().join(".gantry.toml").exists());
}

#[test]
fn test_init_rejects_uppercase_environment() {
    let t = Test::new();

    let output = t.init_cmd("acme", "api", "dev,Prod");
    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("invalid environment name"), "unexpected stderr: {}", err);
}

#[test]
fn test_init_shows_next_step_hint() {
    let t = Test::new();

    let output = t.init_cmd("acme", "api", "dev,prod");
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("set-password") || out.contains("initialized"));
}
