#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn show_json_output_is_valid_and_structured() {
	let json = run_json(&["show", &fixture_arg("sample.json"), "--json"]);

	assert_eq!(json["kind"], "object");
	assert_eq!(json["entries"], 9);
	assert_eq!(json["value"]["name"], "gateway");
	assert_eq!(json["value"]["upstreams"][1]["port"], "9001");
	assert!(json["value"]["retired"].is_null());
}

#[test]
fn get_json_resolves_nested_path() {
	let json = run_json(&["get", &fixture_arg("sample.json"), "--path", "upstreams[0].host", "--json"]);

	assert_eq!(json["path_expr"], "upstreams[0].host");
	assert_eq!(json["kind"], "string");
	assert_eq!(json["value"], "10.0.0.1");
}

#[test]
fn get_json_accepts_quoted_keys() {
	let json = run_json(&["get", &fixture_arg("sample.json"), "--path", "labels[\"app.kubernetes.io/name\"]", "--json"]);
	assert_eq!(json["value"], "gateway");
}

#[test]
fn show_text_output_lists_entries() {
	let output = run(&["show", &fixture_arg("sample.json"), "--compact"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("kind: object"), "{stdout}");
	assert!(stdout.contains("entries: 9"), "{stdout}");
	assert!(stdout.contains("name = \"gateway\""), "{stdout}");
}

#[test]
fn missing_path_fails_with_message() {
	let output = run(&["get", &fixture_arg("sample.json"), "--path", "upstreams[7].host"]);
	assert!(!output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "error: path not found: upstreams[7].host");
}

#[test]
fn malformed_path_fails_before_reading() {
	let output = run(&["get", "does-not-exist.json", "--path", "a..b"]);
	assert!(!output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "error: invalid field path: a..b");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_cfgval")).args(args).env_remove("RUST_LOG").output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"cfgval command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
