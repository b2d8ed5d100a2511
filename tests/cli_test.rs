use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const DATABASE_YML: &str = include_str!("fixtures/database.yml");

/// Run railsyaml with a clean environment: no RAILS_ENV, no colours.
fn railsyaml() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("railsyaml");
    cmd.env_remove("RAILS_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

/// Helper: temp project with `config/database.yml` in place.
fn setup_project() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/database.yml")
        .write_str(DATABASE_YML)
        .unwrap();
    dir
}

// ─── get ─────────────────────────────────────────────────────────

#[test]
fn get_reads_default_document_and_environment() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "database"])
        .assert()
        .success()
        .stdout("development\n");
}

#[test]
fn get_falls_back_to_defaults() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "pool"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn get_with_env_flag() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "database", "--env", "test"])
        .assert()
        .success()
        .stdout("test\n");
}

#[test]
fn get_reads_rails_env_variable() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .env("RAILS_ENV", "test")
        .args(["get", "username"])
        .assert()
        .success()
        .stdout("test\n");
}

#[test]
fn get_env_flag_beats_rails_env_variable() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .env("RAILS_ENV", "test")
        .args(["--env", "development", "get", "username"])
        .assert()
        .success()
        .stdout("development\n");
}

#[test]
fn get_missing_key_fails() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "random"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Key 'random' not defined"));
}

#[test]
fn get_string_rejects_integer() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "port", "--string"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has type integer, expected string"));
}

#[test]
fn get_nested_value_prints_json() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("redis.yml")
        .write_str("defaults:\n  sentinels:\n    - host: s1\n      port: 26379\n")
        .unwrap();

    railsyaml()
        .current_dir(dir.path())
        .args(["--file", "redis.yml", "get", "sentinels"])
        .assert()
        .success()
        .stdout("[{\"host\":\"s1\",\"port\":26379}]\n");
}

#[test]
fn get_missing_document_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "database"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn get_invalid_yaml_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/database.yml")
        .write_str("defaults: [unclosed")
        .unwrap();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "database"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid YAML document"));
}

// ─── config file ─────────────────────────────────────────────────

#[test]
fn config_file_sets_document_and_environment() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("settings/app.yml")
        .write_str(DATABASE_YML)
        .unwrap();
    dir.child(".railsyaml.toml")
        .write_str("[railsyaml]\nfile = \"settings/app.yml\"\ndefault_env = \"test\"\n")
        .unwrap();

    railsyaml()
        .current_dir(dir.path())
        .args(["get", "database"])
        .assert()
        .success()
        .stdout("test\n");
}

#[test]
fn explicit_missing_config_fails() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn malformed_config_fails() {
    let dir = setup_project();
    dir.child(".railsyaml.toml")
        .write_str("[railsyaml\n")
        .unwrap();

    railsyaml()
        .current_dir(dir.path())
        .arg("env")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

// ─── env / envs / show ───────────────────────────────────────────

#[test]
fn env_defaults_to_development() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .arg("env")
        .assert()
        .success()
        .stdout("development\n");
}

#[test]
fn env_empty_rails_env_means_development() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .env("RAILS_ENV", "")
        .arg("env")
        .assert()
        .success()
        .stdout("development\n")
        .stderr(predicate::str::contains("No ''").not());
}

#[test]
fn get_with_empty_env_flag_uses_development() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["--env", "", "get", "database"])
        .assert()
        .success()
        .stdout("development\n");
}

#[test]
fn env_warns_when_block_is_missing() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["env", "--env", "production"])
        .assert()
        .success()
        .stdout("production\n")
        .stderr(predicate::str::contains("No 'production' block"));
}

#[test]
fn envs_marks_current_environment() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["envs", "--env", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  development"))
        .stdout(predicate::str::contains("* test"))
        .stdout(predicate::str::contains("defaults").not());
}

#[test]
fn show_lists_effective_keys() {
    let dir = setup_project();

    railsyaml()
        .current_dir(dir.path())
        .args(["show", "--env", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment: test"))
        .stdout(predicate::str::contains("adapter: postgresql"))
        .stdout(predicate::str::contains("database: test"))
        .stdout(predicate::str::contains("8 key(s) resolved"));
}

#[test]
fn show_json_outputs_object() {
    let dir = setup_project();

    let output = railsyaml()
        .current_dir(dir.path())
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["database"], "development");
    assert_eq!(parsed["pool"], 5);
    assert_eq!(parsed.as_object().unwrap().len(), 8);
}
