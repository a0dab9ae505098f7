use std::path::PathBuf;

use glmdoc::glm::{Model, Result};

use crate::cmd::util::{DecodeArgs, emit_json, surface_name, vec_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value_t = 0)]
	pub lod: usize,
	/// Surface index or hierarchy name.
	#[arg(long)]
	pub surface: String,
	/// Maximum vertices and triangles printed.
	#[arg(long, default_value_t = 32)]
	pub limit: usize,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Dump vertices, weights and triangles of one surface.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		lod,
		surface,
		limit,
		json,
		decode,
	} = args;

	let model = decode.open(&path)?;
	let surface_index = resolve_surface(&model, &surface)?;
	let data = model.surface_checked(lod, surface_index)?;

	if json {
		let payload = SurfaceJson {
			path: path.display().to_string(),
			lod,
			surface: surface_index,
			name: surface_name(&model, surface_index).to_owned(),
			stored_index: data.index,
			bone_references: data.bone_references.clone(),
			vertex_count: data.vertices.len(),
			triangle_count: data.triangles.len(),
			vertices: data
				.vertices
				.iter()
				.take(limit)
				.map(|vertex| {
					let active = usize::from(vertex.num_weights);
					VertexJson {
						position: vertex.position,
						normal: vertex.normal,
						uv: vertex.uv,
						bone_indices: vertex.bone_indices[..active].to_vec(),
						bone_weights: vertex.bone_weights[..active].to_vec(),
					}
				})
				.collect(),
			triangles: data.triangles.iter().take(limit).map(|triangle| triangle.indices).collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("lod: {lod}");
	println!("surface: {surface_index} ({})", surface_name(&model, surface_index));
	println!("stored_index: {}", data.index);
	println!("bone_refs: {:?}", data.bone_references);
	println!("vertices: {}", data.vertices.len());
	for (index, vertex) in data.vertices.iter().take(limit).enumerate() {
		let active = usize::from(vertex.num_weights);
		println!(
			"  {index}\tpos={}\tnormal={}\tuv={}\tbones={:?}\tweights={:?}",
			vec_label(&vertex.position),
			vec_label(&vertex.normal),
			vec_label(&vertex.uv),
			&vertex.bone_indices[..active],
			&vertex.bone_weights[..active]
		);
	}
	println!("triangles: {}", data.triangles.len());
	for (index, triangle) in data.triangles.iter().take(limit).enumerate() {
		let [a, b, c] = triangle.indices;
		println!("  {index}\t{a} {b} {c}");
	}
	if data.vertices.len() > limit || data.triangles.len() > limit {
		println!("(output limited to {limit} entries)");
	}

	Ok(())
}

fn resolve_surface(model: &Model, selector: &str) -> Result<usize> {
	match selector.parse::<usize>() {
		Ok(index) => Ok(index),
		Err(_) => model.find_surface(selector),
	}
}

#[derive(serde::Serialize)]
struct SurfaceJson {
	path: String,
	lod: usize,
	surface: usize,
	name: String,
	stored_index: i32,
	bone_references: Vec<i32>,
	vertex_count: usize,
	triangle_count: usize,
	vertices: Vec<VertexJson>,
	triangles: Vec<[i32; 3]>,
}

#[derive(serde::Serialize)]
struct VertexJson {
	position: [f32; 3],
	normal: [f32; 3],
	uv: [f32; 2],
	bone_indices: Vec<u8>,
	bone_weights: Vec<u16>,
}
