#![allow(missing_docs)]

use std::path::Path;
use std::process::{Command, Output};

use glmdoc_testkit::{GlmBuilder, ModelDir};
use serde_json::Value;

#[test]
fn info_json_reports_header_roots_and_lod_totals() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let json = run_json(&["info", &display(&path), "--json"]);

	assert_eq!(json["name"], "humanoid");
	assert_eq!(json["version"], 6);
	assert_eq!(json["num_bones"], 4);
	assert_eq!(json["num_lods"], 2);
	assert_eq!(json["num_surfaces"], 4);
	assert_eq!(json["roots"], serde_json::json!(["hips"]));
	assert_eq!(json["lods"][0]["vertices"], 12);
	assert_eq!(json["lods"][0]["triangles"], 4);
	assert_eq!(json["lods"][1]["vertices"], 4);
	assert_eq!(json["max_surface_vertices"], 3);
	assert_eq!(json["weight_histogram"], serde_json::json!([12, 0, 0, 0]));
}

#[test]
fn hierarchy_json_walks_depth_first() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let json = run_json(&["hierarchy", &display(&path), "--json"]);

	let names: Vec<&str> = json["items"]
		.as_array()
		.expect("items array")
		.iter()
		.filter_map(|item| item["name"].as_str())
		.collect();
	assert_eq!(names, ["hips", "torso", "head", "legs"]);
	assert_eq!(json["items"][2]["depth"], 2);
	assert_eq!(json["truncated"], false);
	assert!(json["skipped"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn hierarchy_max_depth_records_skipped_links() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let json = run_json(&["hierarchy", &display(&path), "--max-depth", "1", "--json"]);

	assert_eq!(json["items"].as_array().map(Vec::len), Some(3));
	assert_eq!(json["skipped"][0]["child"], 2);
	assert_eq!(json["skipped"][0]["reason"], "depth_limit");
}

#[test]
fn lods_json_lists_every_surface() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let json = run_json(&["lods", &display(&path), "--json"]);

	let lods = json["lods"].as_array().expect("lods array");
	assert_eq!(lods.len(), 2);
	assert_eq!(lods[0]["surfaces"].as_array().map(Vec::len), Some(4));
	assert_eq!(lods[0]["surfaces"][3]["name"], "legs");
	assert_eq!(lods[1]["surfaces"][3]["vertices"], 1);
}

#[test]
fn surface_selects_by_name() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let json = run_json(&["surface", &display(&path), "--surface", "torso", "--json"]);

	assert_eq!(json["surface"], 1);
	assert_eq!(json["name"], "torso");
	assert_eq!(json["vertex_count"], 3);
	assert_eq!(json["triangles"], serde_json::json!([[0, 1, 2]]));
	assert_eq!(json["vertices"][1]["position"], serde_json::json!([1.0, 0.0, 1.0]));
	assert_eq!(json["vertices"][0]["bone_weights"], serde_json::json!([65472]));
}

#[test]
fn surface_out_of_range_fails() {
	let dir = ModelDir::new();
	let path = dir.write("single.glm", &GlmBuilder::single_vertex().build());

	let output = run(&["surface", &display(&path), "--lod", "3", "--surface", "0"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("lod index 3 out of range"), "unexpected stderr: {stderr}");
}

#[test]
fn check_reports_failures_and_exit_status() {
	let dir = ModelDir::new();
	let good = dir.write("good.glm", &GlmBuilder::humanoid().build());
	let mut old = GlmBuilder::single_vertex();
	old.version = 5;
	let bad = dir.write("old.glm", &old.build());

	let output = run(&["check", &display(&good), &display(&bad), "--json"]);

	assert!(!output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
	let reports = json.as_array().expect("report array");
	assert_eq!(reports.len(), 2);
	assert_eq!(reports[0]["ok"], true);
	assert_eq!(reports[0]["lods"], 2);
	assert_eq!(reports[1]["ok"], false);
	assert_eq!(reports[1]["error_kind"], "format");
}

#[test]
fn check_succeeds_when_every_file_decodes() {
	let dir = ModelDir::new();
	let first = dir.write("a.glm", &GlmBuilder::humanoid().build());
	let second = dir.write("b.glm", &GlmBuilder::single_vertex().build());

	let output = run(&["check", &display(&first), &display(&second)]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert_eq!(stdout.lines().filter(|line| line.starts_with("ok\t")).count(), 2);
}

#[test]
fn invalid_version_is_reported_on_stderr() {
	let dir = ModelDir::new();
	let mut builder = GlmBuilder::single_vertex();
	builder.version = 5;
	let path = dir.write("old.glm", &builder.build());

	let output = run(&["info", &display(&path)]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid version 5"), "unexpected stderr: {stderr}");
}

#[test]
fn max_elements_rejects_large_counts() {
	let dir = ModelDir::new();
	let path = dir.write("humanoid.glm", &GlmBuilder::humanoid().build());

	let output = run(&["info", &display(&path), "--max-elements", "2"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("exceeds limit 2"), "unexpected stderr: {stderr}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_glmdoc")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

fn display(path: &Path) -> String {
	path.display().to_string()
}
