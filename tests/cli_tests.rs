use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with an isolated home directory and no ambient yt-stats settings
fn yt_stats(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yt-stats").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("YTSTATS_API_KEY")
        .env_remove("YTSTATS_PORT")
        .env_remove("YTSTATS_LOG_LEVEL")
        .env_remove("YTSTATS_API_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    yt_stats(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yt-stats version "))
        .stdout(predicate::str::contains("commit:"));
}

#[test]
fn test_get_without_api_key_exits_1() {
    let home = TempDir::new().unwrap();
    yt_stats(&home)
        .args(["get", "abc123"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("API key is required"));
}

#[test]
fn test_get_empty_id_exits_1() {
    let home = TempDir::new().unwrap();
    yt_stats(&home)
        .args(["--api-key", "dummy", "get", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("video_id parameter is missing"));
}

#[test]
fn test_config_file_notice_survives_quiet_log_level() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".yt-stats.yaml"), "logLevel: error\n").unwrap();

    yt_stats(&home)
        .args(["--log-json", "version"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Using config file:"));
}

#[test]
fn test_get_requires_argument() {
    let home = TempDir::new().unwrap();
    yt_stats(&home).arg("get").assert().failure();
}

#[test]
fn test_serve_without_api_key_never_starts() {
    let home = TempDir::new().unwrap();
    yt_stats(&home)
        .arg("serve")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required"));
}

#[test]
fn test_api_key_from_config_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".yt-stats.yaml"), "apiKey: from-file\n").unwrap();

    // Key is found, so the failure is the empty identifier rather than the credential
    yt_stats(&home)
        .args(["get", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Using config file:"))
        .stderr(predicate::str::contains("video_id parameter is missing"));
}

#[test]
fn test_unreachable_provider_exits_1() {
    let home = TempDir::new().unwrap();
    yt_stats(&home)
        .args(["--api-key", "SUPERSECRETKEY", "--api-base-url", "http://127.0.0.1:9", "get", "abc123"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error fetching video stats"))
        .stderr(predicate::str::contains("SUPERSECRETKEY").not());
}
