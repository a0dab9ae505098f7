//! Shared test helpers for workspace crates.
//!
//! [`GlmBuilder`] lays out synthetic `.glm` streams: header at offset 0, the
//! hierarchy block (offset table, then entries in a configurable storage
//! order), then every LOD with its surfaces back-to-back. Each surface stores
//! bone references, vertices, the trailing UV array and triangles in that
//! order, so a sequential reader ends each surface exactly where the next one
//! begins.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Size of the fixed file header in bytes.
pub const HEADER_SIZE: usize = 4 + 4 + 64 + 64 + 4 * 7;
/// Size of a surface header in bytes.
pub const SURFACE_HEADER_SIZE: usize = 4 * 9;
/// Size of one stored vertex, excluding its UV.
pub const VERTEX_SIZE: usize = 4 * 6 + 4 + 4;

/// One hierarchy record.
#[derive(Debug, Clone)]
pub struct HierarchySpec {
	/// Surface name.
	pub name: String,
	/// Flag bitmask.
	pub flags: u32,
	/// Shader name.
	pub shader: String,
	/// Shader index (ignored by readers).
	pub shader_index: i32,
	/// Parent index, `-1` for roots.
	pub parent: i32,
	/// Child indices.
	pub children: Vec<i32>,
}

impl HierarchySpec {
	/// Record with no flags, no shader and no children.
	pub fn new(name: &str, parent: i32) -> Self {
		Self {
			name: name.to_owned(),
			flags: 0,
			shader: String::new(),
			shader_index: 0,
			parent,
			children: Vec::new(),
		}
	}

	/// Replace the child list.
	pub fn children(mut self, children: &[i32]) -> Self {
		self.children = children.to_vec();
		self
	}
}

/// One stored vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexSpec {
	/// Normal vector.
	pub normal: [f32; 3],
	/// Position.
	pub position: [f32; 3],
	/// Packed bone index/weight word.
	pub compressed_weight_info: u32,
	/// Low weight bytes.
	pub raw_bone_weights: [u8; 4],
	/// Texture coordinate, written to the trailing UV array.
	pub uv: [f32; 2],
}

impl VertexSpec {
	/// Single-weight vertex bound to bone slot 0.
	pub fn at(position: [f32; 3], uv: [f32; 2]) -> Self {
		Self {
			normal: [0.0, 0.0, 1.0],
			position,
			compressed_weight_info: 0,
			raw_bone_weights: [0; 4],
			uv,
		}
	}
}

/// One surface inside a LOD.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSpec {
	/// Stored surface index.
	pub index: i32,
	/// Bone reference indices.
	pub bone_refs: Vec<i32>,
	/// Vertices.
	pub vertices: Vec<VertexSpec>,
	/// Triangles.
	pub triangles: Vec<[i32; 3]>,
	/// Added to the correct back-pointer; non-zero corrupts it.
	pub ofs_header_skew: i32,
	/// Replaces the stored vertex count when set.
	pub num_verts_override: Option<i32>,
	/// Filler bytes written after the header and after the bone reference
	/// and vertex blocks, so each block sits past where the previous one ends.
	pub block_gap: usize,
}

/// One LOD block.
#[derive(Debug, Clone, Default)]
pub struct LodSpec {
	/// Surfaces stored back-to-back.
	pub surfaces: Vec<SurfaceSpec>,
	/// Undescribed bytes after the last surface, covered by the LOD end offset.
	pub padding: usize,
}

/// Synthetic `.glm` stream builder.
#[derive(Debug, Clone)]
pub struct GlmBuilder {
	/// Identifier bytes.
	pub ident: [u8; 4],
	/// Format version.
	pub version: i32,
	/// Model name bytes, truncated or NUL-padded to 64.
	pub name: Vec<u8>,
	/// Animation name bytes, truncated or NUL-padded to 64.
	pub anim_name: Vec<u8>,
	/// Animation index.
	pub anim_index: i32,
	/// Bone count.
	pub num_bones: i32,
	/// Hierarchy records in index order.
	pub hierarchy: Vec<HierarchySpec>,
	/// Storage order of hierarchy records; defaults to index order.
	pub hierarchy_storage_order: Option<Vec<usize>>,
	/// LOD blocks.
	pub lods: Vec<LodSpec>,
	/// Replaces the stored LOD count when set.
	pub num_lods_override: Option<i32>,
	/// Replaces the stored surface count when set.
	pub num_surfaces_override: Option<i32>,
	/// Zero bytes inserted between header and hierarchy block.
	pub header_gap: usize,
}

impl GlmBuilder {
	/// Empty model with a valid header and no surfaces or LODs.
	pub fn new(name: &str) -> Self {
		Self {
			ident: *b"2LGM",
			version: 6,
			name: name.as_bytes().to_vec(),
			anim_name: b"models/players/_humanoid/_humanoid".to_vec(),
			anim_index: 0,
			num_bones: 1,
			hierarchy: Vec::new(),
			hierarchy_storage_order: None,
			lods: Vec::new(),
			num_lods_override: None,
			num_surfaces_override: None,
			header_gap: 0,
		}
	}

	/// One root surface, one LOD, one vertex at `(1, 2, 3)` with UV `(0.5, 0.5)`.
	pub fn single_vertex() -> Self {
		let mut builder = Self::new("single");
		builder.hierarchy.push(HierarchySpec::new("root", -1));
		builder.lods.push(LodSpec {
			surfaces: vec![SurfaceSpec {
				vertices: vec![VertexSpec::at([1.0, 2.0, 3.0], [0.5, 0.5])],
				..SurfaceSpec::default()
			}],
			padding: 0,
		});
		builder
	}

	/// Two-level body: `hips` root with `torso` and `legs`, `head` under `torso`.
	///
	/// Two LODs; LOD 0 has a triangle per surface, LOD 1 is a vertex-only copy
	/// with four bytes of padding.
	pub fn humanoid() -> Self {
		let mut builder = Self::new("humanoid");
		builder.num_bones = 4;
		builder.hierarchy = vec![
			HierarchySpec::new("hips", -1).children(&[1, 3]),
			HierarchySpec::new("torso", 0).children(&[2]),
			HierarchySpec::new("head", 1),
			HierarchySpec::new("legs", 0),
		];

		let detailed = (0..4)
			.map(|index| SurfaceSpec {
				index,
				bone_refs: vec![index],
				vertices: vec![
					VertexSpec::at([0.0, 0.0, index as f32], [0.0, 0.0]),
					VertexSpec::at([1.0, 0.0, index as f32], [1.0, 0.0]),
					VertexSpec::at([0.0, 1.0, index as f32], [0.0, 1.0]),
				],
				triangles: vec![[0, 1, 2]],
				..SurfaceSpec::default()
			})
			.collect();
		let coarse = (0..4)
			.map(|index| SurfaceSpec {
				index,
				vertices: vec![VertexSpec::at([0.0, 0.0, index as f32], [0.0, 0.0])],
				..SurfaceSpec::default()
			})
			.collect();

		builder.lods = vec![
			LodSpec {
				surfaces: detailed,
				padding: 0,
			},
			LodSpec {
				surfaces: coarse,
				padding: 4,
			},
		];
		builder
	}

	/// Absolute offset of the hierarchy block.
	pub fn hierarchy_offset(&self) -> usize {
		HEADER_SIZE + self.header_gap
	}

	/// Lay out the stream.
	pub fn build(&self) -> Vec<u8> {
		let hierarchy = self.build_hierarchy();
		let ofs_hierarchy = self.hierarchy_offset();
		let ofs_lods = ofs_hierarchy + hierarchy.len();

		let mut lods = Vec::new();
		for lod in &self.lods {
			let base = ofs_lods + lods.len();
			lods.extend_from_slice(&build_lod(lod, base));
		}
		let ofs_end = ofs_lods + lods.len();

		let mut out = Vec::with_capacity(ofs_end);
		out.extend_from_slice(&self.ident);
		put_i32(&mut out, self.version);
		put_name(&mut out, &self.name);
		put_name(&mut out, &self.anim_name);
		put_i32(&mut out, self.anim_index);
		put_i32(&mut out, self.num_bones);
		put_i32(&mut out, self.num_lods_override.unwrap_or(self.lods.len() as i32));
		put_i32(&mut out, ofs_lods as i32);
		put_i32(&mut out, self.num_surfaces_override.unwrap_or(self.hierarchy.len() as i32));
		put_i32(&mut out, ofs_hierarchy as i32);
		put_i32(&mut out, ofs_end as i32);
		out.resize(ofs_hierarchy, 0);
		out.extend_from_slice(&hierarchy);
		out.extend_from_slice(&lods);
		out
	}

	fn build_hierarchy(&self) -> Vec<u8> {
		let order: Vec<usize> = self
			.hierarchy_storage_order
			.clone()
			.unwrap_or_else(|| (0..self.hierarchy.len()).collect());

		let table_len = self.hierarchy.len() * 4;
		let mut offsets = vec![0_i32; self.hierarchy.len()];
		let mut records = Vec::new();
		for index in order {
			offsets[index] = (table_len + records.len()) as i32;
			let entry = &self.hierarchy[index];
			put_name(&mut records, entry.name.as_bytes());
			records.extend_from_slice(&entry.flags.to_le_bytes());
			put_name(&mut records, entry.shader.as_bytes());
			put_i32(&mut records, entry.shader_index);
			put_i32(&mut records, entry.parent);
			put_i32(&mut records, entry.children.len() as i32);
			for child in &entry.children {
				put_i32(&mut records, *child);
			}
		}

		let mut out = Vec::with_capacity(table_len + records.len());
		for offset in offsets {
			put_i32(&mut out, offset);
		}
		out.extend_from_slice(&records);
		out
	}
}

fn build_lod(lod: &LodSpec, base: usize) -> Vec<u8> {
	let mut out = vec![0_u8; 4];
	for surface in &lod.surfaces {
		let surface_base = base + out.len();
		out.extend_from_slice(&build_surface(surface, surface_base));
	}
	out.resize(out.len() + lod.padding, 0xCD);
	let ofs_end = out.len() as i32;
	out[..4].copy_from_slice(&ofs_end.to_le_bytes());
	out
}

fn build_surface(surface: &SurfaceSpec, base: usize) -> Vec<u8> {
	let gap = surface.block_gap;
	let ofs_bone_refs = SURFACE_HEADER_SIZE + gap;
	let ofs_verts = ofs_bone_refs + surface.bone_refs.len() * 4 + gap;
	let ofs_triangles = ofs_verts + surface.vertices.len() * (VERTEX_SIZE + 8) + gap;

	let mut out = Vec::new();
	put_i32(&mut out, 0);
	put_i32(&mut out, surface.index);
	put_i32(&mut out, -(base as i32) + surface.ofs_header_skew);
	put_i32(&mut out, surface.num_verts_override.unwrap_or(surface.vertices.len() as i32));
	put_i32(&mut out, ofs_verts as i32);
	put_i32(&mut out, surface.triangles.len() as i32);
	put_i32(&mut out, ofs_triangles as i32);
	put_i32(&mut out, surface.bone_refs.len() as i32);
	put_i32(&mut out, ofs_bone_refs as i32);

	out.resize(ofs_bone_refs, GAP_FILL);
	for bone in &surface.bone_refs {
		put_i32(&mut out, *bone);
	}
	out.resize(ofs_verts, GAP_FILL);
	for vertex in &surface.vertices {
		for value in vertex.normal.iter().chain(&vertex.position) {
			out.extend_from_slice(&value.to_le_bytes());
		}
		out.extend_from_slice(&vertex.compressed_weight_info.to_le_bytes());
		out.extend_from_slice(&vertex.raw_bone_weights);
	}
	for vertex in &surface.vertices {
		for value in vertex.uv {
			out.extend_from_slice(&value.to_le_bytes());
		}
	}
	out.resize(ofs_triangles, GAP_FILL);
	for triangle in &surface.triangles {
		for index in triangle {
			put_i32(&mut out, *index);
		}
	}
	out
}

const GAP_FILL: u8 = 0xEE;

fn put_i32(out: &mut Vec<u8>, value: i32) {
	out.extend_from_slice(&value.to_le_bytes());
}

fn put_name(out: &mut Vec<u8>, name: &[u8]) {
	let mut field = [0_u8; 64];
	let take = name.len().min(64);
	field[..take].copy_from_slice(&name[..take]);
	out.extend_from_slice(&field);
}

/// Temporary directory holding written model files.
pub struct ModelDir {
	dir: TempDir,
}

impl ModelDir {
	/// Create an empty temporary directory.
	pub fn new() -> Self {
		Self {
			dir: TempDir::new().expect("temp dir is created"),
		}
	}

	/// Directory path.
	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Write `bytes` to `name` inside the directory.
	pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
		let path = self.dir.path().join(name);
		fs::write(&path, bytes).expect("model file is written");
		path
	}
}

impl Default for ModelDir {
	fn default() -> Self {
		Self::new()
	}
}
