//! End-to-end checks that `score` picks its inputs up from the environment.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const AMENITIES: &str = r#"[
    {"id": 1, "lat": 40.7148, "lng": -74.006, "name": "Corner Market", "category": "grocery"},
    {"id": 2, "lat": 40.7158, "lng": -74.006, "name": "Fresh Foods", "category": "grocery"},
    {"id": 3, "lat": 40.7118, "lng": -74.006, "name": "Diner", "category": "restaurant"}
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("amenities.json"), AMENITIES).expect("write amenities");
    dir
}

/// Run the binary from `dir` with only the given `LIVABILITY_*` variables set.
fn livability(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_livability"));
    command
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir);
    for (key, _) in std::env::vars() {
        if key.starts_with("LIVABILITY_") {
            command.env_remove(key);
        }
    }
    command.envs(env.iter().copied());
    command.output().expect("run livability")
}

#[test]
fn coordinates_come_from_subcommand_environment_variables() {
    let dir = workspace();
    let output = livability(
        dir.path(),
        &["score", "amenities.json"],
        &[
            ("LIVABILITY_CMDS_SCORE_LAT", "40.7128"),
            ("LIVABILITY_CMDS_SCORE_LNG", "-74.006"),
        ],
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "score failed: {stderr}");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["walkingScore"], 14);
    assert_eq!(value["urbanIndex"], 3);
}

#[test]
fn cli_flags_override_environment_variables() {
    let dir = workspace();
    let output = livability(
        dir.path(),
        &["score", "amenities.json", "--lat", "40.7128"],
        &[
            ("LIVABILITY_CMDS_SCORE_LAT", "95.0"),
            ("LIVABILITY_CMDS_SCORE_LNG", "-74.006"),
        ],
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "score failed: {stderr}");
}

#[test]
fn missing_coordinates_name_the_variable_to_set() {
    let dir = workspace();
    let output = livability(dir.path(), &["score", "amenities.json"], &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("LIVABILITY_CMDS_SCORE_LAT"),
        "unexpected error: {stderr}"
    );
}
