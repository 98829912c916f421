#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;
use typedparam_testkit::{fixture_path, scratch_file};

#[test]
fn validate_accepts_well_formed_params() {
	let output = run(&["validate", &fixture("params_valid.json"), "--schema", &fixture("schema.json")]);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");
}

#[test]
fn validate_reports_duplicate_with_exit_code_two() {
	let output = run(&["validate", &fixture("params_duplicate.json"), "--schema", &fixture("schema.json"), "--json"]);

	assert_eq!(output.status.code(), Some(2));
	let json = parse_stdout(&output);
	assert_eq!(json["valid"], false);
	assert_eq!(json["code"], "invalid_arg");
	assert_eq!(json["message"], "invalid argument: parameter 'foobar' occurs multiple times");
}

#[test]
fn validate_inline_fields_allow_marked_repeats() {
	let output = run(&[
		"validate",
		&fixture("params_duplicate.json"),
		"--field",
		"foobar:string:multiple",
		"--field",
		"foo:int",
		"--field",
		"bar:uint",
		"--json",
	]);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let json = parse_stdout(&output);
	assert_eq!(json["valid"], true);
	assert!(json["code"].is_null());
}

#[test]
fn validate_reports_unsupported_name() {
	let output = run(&["validate", &fixture("params_valid.json"), "--field", "foo:int", "--field", "bar:uint"]);

	assert_eq!(output.status.code(), Some(2));
	assert_eq!(
		String::from_utf8_lossy(&output.stdout).trim(),
		"argument unsupported: parameter 'foobar' not supported"
	);
}

#[test]
fn validate_reports_type_mismatch_from_scratch_document() {
	let params = scratch_file("mismatch.json", r#"[{ "name": "foobar", "type": "int", "value": 1 }]"#);
	let output = run(&["validate", &params.display().to_string(), "--schema", &fixture("schema.json"), "--json"]);

	assert_eq!(output.status.code(), Some(2));
	let json = parse_stdout(&output);
	assert_eq!(json["message"], "invalid argument: invalid type 'int' for parameter 'foobar', expected 'string'");
}

#[test]
fn out_of_range_value_is_a_usage_error() {
	let output = run(&["validate", &fixture("params_overflow.json"), "--field", "foo:int"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(
		String::from_utf8_lossy(&output.stderr).contains("invalid value for parameter 'foo' of type 'int'"),
		"stderr: {}",
		String::from_utf8_lossy(&output.stderr)
	);
}

#[test]
fn pick_json_lists_matches_in_document_order() {
	let output = run(&["pick", &fixture("params_mixed.json"), "--name", "foo", "--type", "int", "--json"]);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let json = parse_stdout(&output);
	assert_eq!(json["type"], "int");
	assert_eq!(json["count"], 3);
	let indices: Vec<u64> = json["matches"]
		.as_array()
		.expect("matches array")
		.iter()
		.filter_map(|item| item["index"].as_u64())
		.collect();
	assert_eq!(indices, vec![1, 3, 5]);
	assert_eq!(json["matches"][2]["value"], 5);
}

#[test]
fn pick_with_no_match_is_empty_not_an_error() {
	let output = run(&["pick", &fixture("params_mixed.json"), "--name", "foo", "--type", "uint", "--json"]);

	assert!(output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["count"], 0);
	assert!(json["matches"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn pick_strings_keeps_absent_entries() {
	let output = run(&["pick-strings", &fixture("params_mixed.json"), "--name", "bar", "--json"]);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let json = parse_stdout(&output);
	assert_eq!(json["count"], 4);
	assert_eq!(json["values"], serde_json::json!(["bar1", "bar2", null, "bar3"]));
}

#[test]
fn get_enforces_requested_type() {
	let found = run(&["get", &fixture("params_mixed.json"), "--name", "foo", "--json"]);
	assert!(found.status.success());
	let json = parse_stdout(&found);
	assert_eq!(json["type"], "int");
	assert_eq!(json["value"], 1);

	let mismatch = run(&["get", &fixture("params_mixed.json"), "--name", "bar", "--type", "uint"]);
	assert_eq!(mismatch.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&mismatch.stderr).contains("invalid type 'string' for parameter 'bar', expected 'uint'"));

	let missing = run(&["get", &fixture("params_mixed.json"), "--name", "nope"]);
	assert_eq!(missing.status.code(), Some(2));
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_typedparam")).args(args).output().expect("command executes")
}

fn parse_stdout(output: &Output) -> Value {
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
