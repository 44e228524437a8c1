//! End-to-end tests for the `folio` command line.

use std::process::Command;

/// Path to the folio binary
fn folio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_folio")
}

#[test]
fn test_check_passes() {
    let output = Command::new(folio_bin())
        .args(["check"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Embedded content should be valid. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Content is valid (3 projects)"));
}

#[test]
fn test_check_json_strict() {
    let output = Command::new(folio_bin())
        .args(["check", "--json", "--strict"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], true);
    assert_eq!(result["projects"], 3);
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
    assert_eq!(result["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_projects_lists_in_order() {
    let output = Command::new(folio_bin())
        .args(["projects", "--lang", "en"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["vegwam", "navitime", "relaxon"]);
    assert!(stdout.contains("VegWam"));
}

#[test]
fn test_projects_json() {
    let output = Command::new(folio_bin())
        .args(["projects", "--lang", "jp", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let projects = result.as_array().unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[2]["id"], "relaxon");
    assert_eq!(projects[2]["has_prototype"], false);
    assert_eq!(projects[0]["has_design_system"], true);
}

#[test]
fn test_show_case_study() {
    let output = Command::new(folio_bin())
        .args(["show", "vegwam", "--lang", "ua"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["id"], "vegwam");
    assert_eq!(result["process"][0]["number"], 1);
    assert!(result["persona"].is_object());
}

#[test]
fn test_show_unknown_project() {
    let output = Command::new(folio_bin())
        .args(["show", "VegWam", "--lang", "en"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project not found: 'VegWam'"));
}

#[test]
fn test_invalid_language_rejected() {
    let output = Command::new(folio_bin())
        .args(["projects", "--lang", "fr"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported language 'fr'"));
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = Command::new(folio_bin())
        .args(["config", "set"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_set_then_show() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let set = Command::new(folio_bin())
        .args(["config", "set", "--port", "8088", "--detail", "modal"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));
    assert!(temp_dir.path().join("folio").join("config.toml").exists());

    let show = Command::new(folio_bin())
        .args(["config", "show", "--json"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(show.status.code(), Some(0));

    let config: serde_json::Value =
        serde_json::from_slice(&show.stdout).expect("Should parse JSON output");
    assert_eq!(config["server"]["port"], 8088);
    assert_eq!(config["site"]["detail_presentation"], "modal");
    assert_eq!(config["site"]["default_language"], "jp");
}
