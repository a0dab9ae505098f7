use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glmdoc::glm::{DecodeOptions, Model};
use rayon::prelude::*;

use crate::cmd::util::{DecodeArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true)]
	pub paths: Vec<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Decode every path in parallel; fails when any file fails.
pub fn run(args: Args) -> ExitCode {
	let Args { paths, json, decode } = args;
	let options = decode.options();

	let reports: Vec<CheckJson> = paths.par_iter().map(|path| check_one(path, &options)).collect();
	let failures = reports.iter().filter(|report| !report.ok).count();
	tracing::debug!(files = reports.len(), failures, "check finished");

	if json {
		emit_json(&reports);
	} else {
		for report in &reports {
			match (&report.error_kind, &report.error) {
				(Some(kind), Some(error)) => println!("fail\t{}\t{kind}\t{error}", report.path),
				_ => println!(
					"ok\t{}\tlods={}\tsurfaces={}\tvertices={}",
					report.path, report.lods, report.surfaces, report.vertices
				),
			}
		}
	}

	if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn check_one(path: &Path, options: &DecodeOptions) -> CheckJson {
	let display = path.display().to_string();
	match Model::open_with_options(path, options) {
		Ok(model) => CheckJson {
			path: display,
			ok: true,
			lods: model.lods().len(),
			surfaces: model.hierarchy().len(),
			vertices: model.lods().iter().map(|lod| lod.vertex_count()).sum(),
			error_kind: None,
			error: None,
		},
		Err(err) => CheckJson {
			path: display,
			ok: false,
			lods: 0,
			surfaces: 0,
			vertices: 0,
			error_kind: Some(err.kind().as_str()),
			error: Some(err.to_string()),
		},
	}
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	ok: bool,
	lods: usize,
	surfaces: usize,
	vertices: usize,
	error_kind: Option<&'static str>,
	error: Option<String>,
}
