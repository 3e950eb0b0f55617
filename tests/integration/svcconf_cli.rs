//! Integration tests for the svcconf binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"
apiToken = "very-secret-default"

[security]
trustStorePath = "/etc/ssl/default.jks"

[services.billing]
uris = ["https://billing-1:8443", "https://billing-2:8443"]
apiToken = "very-secret-billing"

[services.search]
uris = []
"#;

fn run(temp: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svcconf"))
        .env("XDG_CONFIG_HOME", temp.join("xdg"))
        .env("HOME", temp.join("home"))
        .env_remove("SERVICE_CONFIG_ENV")
        .env_remove("SERVICE_CONFIG_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn workspace_with_config() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("services.toml"), CONFIG).unwrap();
    temp_dir
}

#[test]
fn test_list_json() {
    let temp_dir = workspace_with_config();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "list", "--format", "json"]);
    assert!(
        output.status.success(),
        "svcconf list should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["services"][0]["name"], "billing");
    assert_eq!(value["services"][0]["token"], "service");
    assert_eq!(value["services"][1]["name"], "search");
    assert_eq!(value["services"][1]["token"], "default");
    assert_eq!(value["services"][1]["security"], "default");
    assert!(!stdout.contains("very-secret"));
}

#[test]
fn test_show_text() {
    let temp_dir = workspace_with_config();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "show", "billing"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Service: billing"));
    assert!(stdout.contains("https://billing-2:8443"));
    assert!(stdout.contains("Token: set on service"));
    assert!(!stdout.contains("very-secret"));
}

#[test]
fn test_show_unknown_service_fails() {
    let temp_dir = workspace_with_config();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "show", "ghost"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unable to find the configuration for service 'ghost'"),
        "stderr={}",
        stderr
    );
}

#[test]
fn test_validate_with_explicit_config_file() {
    let temp_dir = workspace_with_config();
    let config_path = temp_dir.path().join("config").join("services.toml");
    let config_arg = config_path.to_string_lossy();
    let output = run(temp_dir.path(), &["--config", config_arg.as_ref(), "validate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid: 2 service(s)"), "{}", stdout);
}

#[test]
fn test_validate_reports_broken_security() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &config_path,
        r#"
[security]
trustStorePath = "/etc/ssl/ca.pem"
keyStorePassword = "orphan"
"#,
    )
    .unwrap();
    let config_arg = config_path.to_string_lossy();
    let output = run(temp_dir.path(), &["--config", config_arg.as_ref(), "validate"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Default security"), "stderr={}", stderr);
    assert!(!stderr.contains("orphan"));
}
