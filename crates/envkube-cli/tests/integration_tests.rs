//! Integration tests for CLI commands

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run envkube
fn envkube(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_envkube"))
        .args(args)
        .output()
        .expect("Failed to execute envkube")
}

/// Write a .env fixture and return the directory holding it
fn fixture(content: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.env");
    fs::write(&path, content).unwrap();
    let path_str = path.to_str().unwrap().to_string();
    (dir, path_str)
}

const SAMPLE: &str = "DB_PASSWORD=\"s3cr3t\"\nPORT=8080\n# comment\nEMPTY=\n";

mod convert_command {
    use super::*;

    #[test]
    fn test_convert_prints_all_three_artifacts() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["convert", &env_file]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("kind: ConfigMap"));
        assert!(stdout.contains("kind: ExternalSecret"));
        assert!(stdout.contains("\"DB_PASSWORD\": \"s3cr3t\""));
    }

    #[test]
    fn test_show_only_configmap_is_raw_yaml() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["convert", &env_file, "--show-only", "configmap"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("apiVersion: v1\n"));
        assert!(stdout.contains("  PORT: \"8080\"\n"));
        assert!(!stdout.contains("DB_PASSWORD"));
    }

    #[test]
    fn test_show_only_vault_is_valid_json() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["convert", &env_file, "--show-only", "vault"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json, serde_json::json!({"DB_PASSWORD": "s3cr3t"}));
    }

    #[test]
    fn test_app_name_derives_artifact_names() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["convert", &env_file, "--app-name", "billing"]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("name: billing-configmap"));
        assert!(stdout.contains("name: billing-secret"));
    }

    #[test]
    fn test_plain_override_moves_entry_to_configmap() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&[
            "convert",
            &env_file,
            "--plain",
            "DB_PASSWORD",
            "--show-only",
            "configmap",
        ]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("  DB_PASSWORD: \"s3cr3t\"\n"));
    }

    #[test]
    fn test_secret_override_moves_entry_to_external_secret() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&[
            "convert",
            &env_file,
            "--secret",
            "PORT",
            "--show-only",
            "external-secret",
        ]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("- secretKey: PORT"));
    }

    #[test]
    fn test_output_dir_writes_three_files() {
        let (_dir, env_file) = fixture(SAMPLE);
        let out = TempDir::new().unwrap();
        let out_path = out.path().join("artifacts");

        let output = envkube(&[
            "convert",
            &env_file,
            "--output-dir",
            out_path.to_str().unwrap(),
            "--vault-path",
            "team/billing",
        ]);

        assert!(output.status.success());
        let configmap = fs::read_to_string(out_path.join("configmap.yaml")).unwrap();
        let external = fs::read_to_string(out_path.join("external-secret.yaml")).unwrap();
        let secrets = fs::read_to_string(out_path.join("secrets.json")).unwrap();

        assert!(configmap.contains("  PORT: \"8080\"\n"));
        assert!(external.contains("key: team/billing"));
        assert_eq!(secrets, "{\n  \"DB_PASSWORD\": \"s3cr3t\"\n}");
    }

    #[test]
    fn test_missing_file_exits_with_io_code() {
        let output = envkube(&["convert", "/nonexistent/app.env"]);

        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(5));
    }

    #[test]
    fn test_conflicting_overrides_exit_with_usage_code() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&[
            "convert",
            &env_file,
            "--secret",
            "PORT",
            "--plain",
            "PORT",
        ]);

        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(64));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("both --secret and --plain"));
    }
}

mod inspect_command {
    use super::*;

    #[test]
    fn test_inspect_lists_entries() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["inspect", &env_file]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("DB_PASSWORD"));
        assert!(stdout.contains("PORT"));
        assert!(stdout.contains("2 entries, 1 secret, 1 plain"));
    }

    #[test]
    fn test_inspect_json_output() {
        let (_dir, env_file) = fixture(SAMPLE);
        let output = envkube(&["inspect", &env_file, "--json"]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"key": "DB_PASSWORD", "value": "s3cr3t", "isSecret": true},
                {"key": "PORT", "value": "8080", "isSecret": false},
            ])
        );
    }

    #[test]
    fn test_inspect_empty_file() {
        let (_dir, env_file) = fixture("# only a comment\n");
        let output = envkube(&["inspect", &env_file]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("No entries parsed"));
    }
}
