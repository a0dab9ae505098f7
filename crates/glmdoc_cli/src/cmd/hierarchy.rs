use std::path::PathBuf;

use glmdoc::glm::{Model, Result, WalkOptions, WalkResult, walk_hierarchy};

use crate::cmd::util::{DecodeArgs, emit_json, surface_name};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print the surface tree depth-first from every root.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		max_depth,
		json,
		decode,
	} = args;

	let model = decode.open(&path)?;
	let mut options = WalkOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	let result = walk_hierarchy(&model, &options);

	if json {
		print_json(&path, &model, &result);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("entries: {}", model.hierarchy().len());
	println!("roots: {}", model.root_indices().len());
	for item in &result.items {
		let entry = &model.hierarchy()[item.index];
		let shader = if entry.shader.is_empty() { "-" } else { entry.shader.as_str() };
		println!(
			"{}{}\t{}\tflags=0x{:08x}\tshader={}",
			"  ".repeat(item.depth),
			item.index,
			entry.name,
			entry.flags,
			shader
		);
	}

	for skip in &result.skipped {
		let parent = skip.parent.map_or_else(|| "-".to_owned(), |parent| parent.to_string());
		println!("skipped: parent={parent} child={} reason={}", skip.child, skip.reason.as_str());
	}
	if result.truncated {
		println!("truncated: true");
	}

	Ok(())
}

fn print_json(path: &std::path::Path, model: &Model, result: &WalkResult) {
	let payload = HierarchyJson {
		path: path.display().to_string(),
		roots: model.root_indices().to_vec(),
		items: result
			.items
			.iter()
			.map(|item| {
				let entry = &model.hierarchy()[item.index];
				HierarchyItemJson {
					index: item.index,
					depth: item.depth,
					parent: item.parent,
					name: surface_name(model, item.index).to_owned(),
					shader: entry.shader.clone(),
					flags: entry.flags,
					children: entry.child_indices.clone(),
				}
			})
			.collect(),
		skipped: result
			.skipped
			.iter()
			.map(|skip| SkipJson {
				parent: skip.parent,
				child: skip.child,
				reason: skip.reason.as_str(),
			})
			.collect(),
		truncated: result.truncated,
	};
	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct HierarchyJson {
	path: String,
	roots: Vec<usize>,
	items: Vec<HierarchyItemJson>,
	skipped: Vec<SkipJson>,
	truncated: bool,
}

#[derive(serde::Serialize)]
struct HierarchyItemJson {
	index: usize,
	depth: usize,
	parent: Option<usize>,
	name: String,
	shader: String,
	flags: u32,
	children: Vec<i32>,
}

#[derive(serde::Serialize)]
struct SkipJson {
	parent: Option<usize>,
	child: i32,
	reason: &'static str,
}
