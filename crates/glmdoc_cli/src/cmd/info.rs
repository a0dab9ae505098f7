use std::path::PathBuf;

use glmdoc::glm::{ModelStats, Result};

use crate::cmd::util::{DecodeArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print header fields, root surfaces and per-LOD totals.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;

	let model = decode.open(&path)?;
	let header = model.header();
	let stats = ModelStats::collect(&model);
	let roots: Vec<&str> = model.roots().map(|(_, entry)| entry.name.as_str()).collect();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			name: model.name(),
			anim_name: model.anim_name(),
			anim_index: header.anim_index,
			version: header.version,
			num_bones: model.num_bones(),
			num_lods: model.lods().len(),
			num_surfaces: model.hierarchy().len(),
			ofs_lods: header.ofs_lods,
			ofs_surf_hierarchy: header.ofs_surf_hierarchy,
			ofs_end: header.ofs_end,
			roots,
			lods: stats
				.lods
				.iter()
				.map(|row| LodJson {
					lod: row.lod,
					surfaces: row.surfaces,
					vertices: row.vertices,
					triangles: row.triangles,
					bone_references: row.bone_references,
				})
				.collect(),
			max_surface_vertices: stats.max_surface_vertices,
			max_surface_triangles: stats.max_surface_triangles,
			weight_histogram: stats.weight_histogram,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("name: {}", model.name());
	println!("anim_name: {}", model.anim_name());
	println!("anim_index: {}", header.anim_index);
	println!("version: {}", header.version);
	println!("num_bones: {}", model.num_bones());
	println!("num_lods: {}", model.lods().len());
	println!("num_surfaces: {}", model.hierarchy().len());
	println!("ofs_lods: {}", header.ofs_lods);
	println!("ofs_surf_hierarchy: {}", header.ofs_surf_hierarchy);
	println!("ofs_end: {}", header.ofs_end);
	println!("roots: {}", roots.join(", "));
	println!("max_surface_vertices: {}", stats.max_surface_vertices);
	println!("max_surface_triangles: {}", stats.max_surface_triangles);
	println!(
		"weights_per_vertex: 1={} 2={} 3={} 4={}",
		stats.weight_histogram[0], stats.weight_histogram[1], stats.weight_histogram[2], stats.weight_histogram[3]
	);

	println!("lods:");
	for row in &stats.lods {
		println!(
			"  {}: surfaces={} vertices={} triangles={} bone_refs={}",
			row.lod, row.surfaces, row.vertices, row.triangles, row.bone_references
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson<'a> {
	path: String,
	name: &'a str,
	anim_name: &'a str,
	anim_index: i32,
	version: i32,
	num_bones: u32,
	num_lods: usize,
	num_surfaces: usize,
	ofs_lods: i32,
	ofs_surf_hierarchy: i32,
	ofs_end: i32,
	roots: Vec<&'a str>,
	lods: Vec<LodJson>,
	max_surface_vertices: usize,
	max_surface_triangles: usize,
	weight_histogram: [usize; 4],
}

#[derive(serde::Serialize)]
struct LodJson {
	lod: usize,
	surfaces: usize,
	vertices: usize,
	triangles: usize,
	bone_references: usize,
}
