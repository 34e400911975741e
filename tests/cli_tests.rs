use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("folio-cli-test-{nanos}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

fn folio() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_folio"));
    // Results must not depend on the caller's environment.
    command
        .env_remove("FOLIO_API_URL")
        .env_remove("FOLIO_API_KEY")
        .env_remove("FOLIO_ADMIN_EMAIL")
        .env_remove("FOLIO_ADMIN_PASSWORD")
        .env_remove("RUST_LOG");
    command
}

fn dead_backend_toml() -> String {
    format!(
        concat!(
            "[backend]\n",
            "api_url = \"http://127.0.0.1:{}\"\n",
            "api_key = \"test-anon-key\"\n",
            "timeout_secs = 5\n",
            "connect_timeout_secs = 1\n",
        ),
        closed_port()
    )
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let toml = concat!(
        "[backend]\n",
        "api_url = \"ftp://abc123.supabase.co\"\n",
        "api_key = \"publishable-anon-key\"\n",
    );

    let path = write_temp_config(toml);
    let output = folio()
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");

    // Check both stdout and stderr for the error message
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("invalid value for api_url") || combined.contains("api_url"),
        "Expected error message about invalid config.\nstdout: {stdout}\nstderr: {stderr}"
    );
}

#[test]
fn cli_check_config_fails_on_missing_key_material() {
    let path = write_temp_config("[backend]\napi_url = \"https://abc123.supabase.co\"\n");
    let output = folio()
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing required field: api_key"),
        "Expected the missing field to be named: {stderr}"
    );
}

#[test]
fn cli_show_requires_a_configured_backend() {
    let path = write_temp_config("[site]\nname = \"Nobody\"\n");
    let output = folio()
        .args(["show", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing required field"),
        "Expected missing field error, got: {stderr}"
    );
}

#[test]
fn cli_show_succeeds_when_the_backend_is_down() {
    let path = write_temp_config(&dead_backend_toml());
    let output = folio()
        .args(["show", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Expected the page to render from defaults.\nstdout: {stdout}\nstderr: {stderr}"
    );
    assert!(stdout.contains("Your Name"), "missing hero copy: {stdout}");
    assert!(
        stdout.contains("(no featured projects yet)"),
        "missing empty projects note: {stdout}"
    );
    assert!(
        stdout.contains("(no skills yet)"),
        "missing empty skills note: {stdout}"
    );
}

#[test]
fn cli_avatar_reports_builtin_defaults_when_the_backend_is_down() {
    let path = write_temp_config(&dead_backend_toml());
    let output = folio()
        .args(["avatar", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("built-in defaults"),
        "Expected the defaults origin to be reported: {stdout}"
    );
}

#[test]
fn cli_env_overrides_reach_the_backend_section() {
    let path = write_temp_config("[logging]\nlevel = \"warn\"\n");
    let output = folio()
        .args(["config", "show", "--config"])
        .arg(&path)
        .env("FOLIO_API_URL", "https://override.example.com")
        .env("FOLIO_API_KEY", "env-anon-key")
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("https://override.example.com"),
        "Expected the env URL to win: {stdout}"
    );
    assert!(
        stdout.contains("API key configured"),
        "Expected the env key to register: {stdout}"
    );
}

#[test]
fn cli_admin_requires_credentials_before_touching_the_network() {
    let path = write_temp_config(&dead_backend_toml());
    let output = folio()
        .args(["admin", "avatar", "show", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("FOLIO_ADMIN_EMAIL"),
        "Expected the missing credential to be named: {stderr}"
    );
}

#[test]
fn cli_json_show_emits_machine_readable_output() {
    let path = write_temp_config(&dead_backend_toml());
    let output = folio()
        .args(["--json", "show", "--config"])
        .arg(&path)
        .output()
        .expect("run folio");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout parses as JSON");
    assert_eq!(parsed["avatar_origin"], "defaults");
    assert_eq!(parsed["avatar"]["show_orbital_elements"], true);
    assert!(parsed["projects"].as_array().is_some());
}
