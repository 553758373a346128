use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn tzsegment(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tzsegment"))
        .args(args)
        .output()
        .expect("Failed to execute tzsegment")
}

fn tzsegment_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tzsegment"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tzsegment");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "tzsegment failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn temp_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tzsegment-{}-{name}.json", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn label_text_and_json() {
    let output = tzsegment(&["label", "--index", "48"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "12:00 - 12:15\n");

    let json = stdout_json(&tzsegment(&["label", "--index", "-1", "--output-format", "json"]));
    assert_eq!(json["index"], 95);
    assert_eq!(json["label"], "23:45 - 23:59");
}

#[test]
fn label_without_index_is_empty() {
    let output = tzsegment(&["label"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");

    let json = stdout_json(&tzsegment(&["label", "--output-format", "json"]));
    assert!(json["index"].is_null());
    assert_eq!(json["label"], "");
}

#[test]
fn label_with_index_suffix() {
    let output = tzsegment(&["label", "--index", "3", "--width", "30", "--with-index"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "01:30 - 02:00 (3)\n");
}

#[test]
fn remap_differs_across_dst() {
    let winter = stdout_json(&tzsegment(&["remap", "--utc-index", "0", "--date", "2023-07-15"]));
    assert_eq!(winter["tz"], "America/Santiago");
    assert_eq!(winter["offset_minutes"], -240);
    assert_eq!(winter["offset_segments"], -16);
    assert_eq!(winter["local_index"], 80);

    let summer = stdout_json(&tzsegment(&["remap", "--utc-index", "0", "--date", "2024-01-15"]));
    assert_eq!(summer["offset_segments"], -12);
    assert_eq!(summer["local_index"], 84);
    assert_eq!(summer["local_label"], "21:00 - 21:15");
}

#[test]
fn remap_inverse_recovers_utc_index() {
    let json = stdout_json(&tzsegment(&[
        "remap",
        "--utc-index",
        "48",
        "--date",
        "2024-01-15",
        "--inverse",
    ]));
    assert_eq!(json["local_index"], 48);
    assert_eq!(json["utc_index"], 60);
    assert_eq!(json["utc_label"], "15:00 - 15:15");
}

#[test]
fn options_lists() {
    let json = stdout_json(&tzsegment(&["options"]));
    assert_eq!(json["months"].as_array().unwrap().len(), 12);
    assert_eq!(json["months"][0]["label"], "Enero");
    assert_eq!(json["day_types"][2]["value"], "D");
    assert_eq!(json["day_types"][3]["value"], false);
}

#[test]
fn classify_reads_stdin() {
    let output = tzsegment_with_stdin(
        &["classify", "--output-format", "json"],
        "2023-10-03T15:00:00Z\n",
    );
    let json = stdout_json(&output);
    assert_eq!(json["segment"], 48);
    assert_eq!(json["day_type"], "L");
}

#[test]
fn classify_rejects_unparseable_line() {
    let output = tzsegment_with_stdin(&["classify"], "garbage\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("garbage"));
}

#[test]
fn classify_strict_format_rejects_text() {
    let output = tzsegment_with_stdin(&["classify", "--format", "epoch_s"], "2023-10-03\n");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn classify_unknown_format_is_input_error() {
    let output = tzsegment_with_stdin(&["classify", "--format", "bogus"], "1696345200\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}

#[test]
fn classify_accepts_minute_precision_offsets() {
    let output = tzsegment_with_stdin(
        &["classify", "--format", "iso8601", "--output-format", "json"],
        "2023-10-03T12:00-03:00\n",
    );
    let json = stdout_json(&output);
    assert_eq!(json["segment"], 48);
    assert_eq!(json["local"], "2023-10-03 12:00:00");
}

#[test]
fn remap_rejects_old_index_flag() {
    let output = tzsegment(&["remap", "--index", "0", "--date", "2024-01-15"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_timezone_is_input_error() {
    let output = tzsegment_with_stdin(
        &["classify", "--tz", "Mars/Olympus", "--output-format", "json"],
        "",
    );
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["exit_code"], 2);
    assert!(envelope["error"].as_str().unwrap().contains("Mars/Olympus"));
}

#[test]
fn invalid_width_and_output_format() {
    let output = tzsegment(&["remap", "--utc-index", "0", "--date", "2024-01-15", "--width", "7"]);
    assert_eq!(output.status.code(), Some(2));

    let output = tzsegment(&["label", "--index", "1", "--output-format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));

    let output = tzsegment(&["remap", "--utc-index", "0", "--date", "15/01/2024"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn config_file_with_flag_override() {
    let config = temp_config("hourly-utc", r#"{"timezone": "UTC", "segment_minutes": 60}"#);
    let config_arg = config.to_str().unwrap();

    let from_file = tzsegment_with_stdin(
        &["classify", "--config", config_arg, "--output-format", "json"],
        "2023-10-03T15:00:00Z\n",
    );
    let json = stdout_json(&from_file);
    assert_eq!(json["tz"], "UTC");
    assert_eq!(json["segment"], 15);

    let overridden = tzsegment_with_stdin(
        &[
            "classify",
            "--config",
            config_arg,
            "--tz",
            "America/Santiago",
            "--output-format",
            "json",
        ],
        "2023-10-03T15:00:00Z\n",
    );
    let json = stdout_json(&overridden);
    assert_eq!(json["tz"], "America/Santiago");
    assert_eq!(json["segment"], 12);
    assert_eq!(json["label"], "12:00 - 13:00");

    std::fs::remove_file(config).ok();
}

#[test]
fn missing_config_file_is_input_error() {
    let output = tzsegment_with_stdin(&["classify", "--config", "/nonexistent/tzsegment.json"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config file"));
}
