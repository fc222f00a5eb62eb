use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::time::{sleep, timeout};

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config
fn minimal_config(port: u16) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}
"#,
        port
    )
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn moodcast() -> tokio::process::Command {
    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_moodcast"));
    command.env("RUST_LOG", "error").kill_on_drop(true);
    command
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &std::path::Path) -> tokio::process::Child {
    moodcast()
        .env("MOODCAST_CONFIG", config_path)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

#[tokio::test]
async fn test_health_endpoint() {
    let port = get_available_port();
    let config = write_temp(&minimal_config(port));

    let mut server = spawn_server(config.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_env_overrides_config_file() {
    let port = get_available_port();
    let config = write_temp(&minimal_config(port));

    let mut server = moodcast()
        .env("MOODCAST_CONFIG", config.path())
        .env("MOODCAST_SCORER__STRATEGY", "polarity")
        .spawn()
        .expect("Failed to spawn server");
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let json: serde_json::Value = Client::new()
        .get(format!("http://127.0.0.1:{}/api/v1/config", port))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(json["scorer"]["strategy"], "polarity");
    assert_eq!(json["server"]["port"], port);

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = timeout(
        Duration::from_secs(5),
        moodcast()
            .env("MOODCAST_CONFIG", "/nonexistent/config.toml")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_threshold_exits_with_error() {
    let config = write_temp(
        r#"
[decision]
dominance_threshold = 1.5
"#,
    );

    let result = timeout(
        Duration::from_secs(5),
        moodcast().arg("--config").arg(config.path()).output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_run_from_file_prints_message() {
    let config = write_temp("");
    let posts = write_temp(
        r#"[
            {"text": "RT @a: great day! #nice", "reshare_count": 3},
            {"text": "I hate mondays", "reshare_count": 0},
            {"text": "ok", "reshare_count": 3},
            {"text": "ok", "reshare_count": 3}
        ]"#,
    );

    let result = timeout(
        Duration::from_secs(10),
        moodcast()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .arg("--input")
            .arg(posts.path())
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("No man's land"));
    assert!(stdout.contains("Positive posts percentage: 33.33 %"));
}

#[tokio::test]
async fn test_run_from_empty_file_reports_no_data() {
    let config = write_temp("");
    let posts = write_temp("[]");

    let result = timeout(
        Duration::from_secs(10),
        moodcast()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .arg("--input")
            .arg(posts.path())
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).starts_with("No data:"));
}

#[tokio::test]
async fn test_run_without_feed_or_input_fails() {
    let config = write_temp("");

    let result = timeout(
        Duration::from_secs(5),
        moodcast()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_run_against_feed_without_user_id_fails() {
    // Nothing listens on port 1; the run must stop before any request.
    let config = write_temp(
        r#"
[feed]
base_url = "http://127.0.0.1:1"
access_token = "token"
"#,
    );

    let result = timeout(
        Duration::from_secs(5),
        moodcast()
            .arg("--config")
            .arg(config.path())
            .arg("run")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("No user id given"), "stderr: {}", stderr);
}
