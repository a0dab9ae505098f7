use std::path::PathBuf;

use glmdoc::glm::Result;

use crate::cmd::util::{DecodeArgs, emit_json, surface_name};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print per-surface geometry counts for every LOD.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;

	let model = decode.open(&path)?;

	if json {
		let payload = LodsJson {
			path: path.display().to_string(),
			lods: model
				.lods()
				.iter()
				.enumerate()
				.map(|(lod_index, lod)| LodJson {
					lod: lod_index,
					vertices: lod.vertex_count(),
					triangles: lod.triangle_count(),
					surfaces: lod
						.surfaces
						.iter()
						.enumerate()
						.map(|(surface_index, surface)| SurfaceRowJson {
							surface: surface_index,
							name: surface_name(&model, surface_index).to_owned(),
							stored_index: surface.index,
							vertices: surface.vertices.len(),
							triangles: surface.triangles.len(),
							bone_references: surface.bone_references.len(),
						})
						.collect(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	for (lod_index, lod) in model.lods().iter().enumerate() {
		println!(
			"lod {lod_index}: surfaces={} vertices={} triangles={}",
			lod.surfaces.len(),
			lod.vertex_count(),
			lod.triangle_count()
		);
		for (surface_index, surface) in lod.surfaces.iter().enumerate() {
			println!(
				"  {surface_index}\t{}\tverts={}\ttris={}\tbone_refs={}",
				surface_name(&model, surface_index),
				surface.vertices.len(),
				surface.triangles.len(),
				surface.bone_references.len()
			);
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct LodsJson {
	path: String,
	lods: Vec<LodJson>,
}

#[derive(serde::Serialize)]
struct LodJson {
	lod: usize,
	vertices: usize,
	triangles: usize,
	surfaces: Vec<SurfaceRowJson>,
}

#[derive(serde::Serialize)]
struct SurfaceRowJson {
	surface: usize,
	name: String,
	stored_index: i32,
	vertices: usize,
	triangles: usize,
	bone_references: usize,
}
