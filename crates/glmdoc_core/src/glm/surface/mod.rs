use std::io::{Read, Seek};

use tracing::trace;

use crate::glm::{GlmError, GlmReader, PackedVertex, Result, Vertex, bounded_vec};

/// Three vertex indices into the owning surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
	/// Vertex indices.
	pub indices: [i32; 3],
}

/// Geometry of one surface in one LOD.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
	/// Stored surface index.
	pub index: i32,
	/// Indices into the model's bone set.
	pub bone_references: Vec<i32>,
	/// Triangles.
	pub triangles: Vec<Triangle>,
	/// Vertices.
	pub vertices: Vec<Vertex>,
}

/// Fixed fields at the start of a surface. Offsets are relative to the
/// surface base, except `ofs_header` which points back to the file start.
#[derive(Debug, Clone, Copy)]
struct SurfaceHeader {
	index: i32,
	ofs_header: i32,
	num_verts: i32,
	ofs_verts: i32,
	num_triangles: i32,
	ofs_triangles: i32,
	num_bone_refs: i32,
	ofs_bone_refs: i32,
}

impl SurfaceHeader {
	fn read<R: Read + Seek>(reader: &mut GlmReader<R>) -> Result<Self> {
		reader.step("reading surface header");
		let _ident = reader.read_i32_le()?;
		Ok(Self {
			index: reader.read_i32_le()?,
			ofs_header: reader.read_i32_le()?,
			num_verts: reader.read_i32_le()?,
			ofs_verts: reader.read_i32_le()?,
			num_triangles: reader.read_i32_le()?,
			ofs_triangles: reader.read_i32_le()?,
			num_bone_refs: reader.read_i32_le()?,
			ofs_bone_refs: reader.read_i32_le()?,
		})
	}
}

impl Surface {
	/// Read one surface starting at the reader's current position.
	///
	/// Bone references, vertices and triangles are each located by seeking
	/// from the surface base. The reader is left after the last triangle.
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>) -> Result<Self> {
		reader.step("locating surface");
		let base = reader.tell()?;
		let head = SurfaceHeader::read(reader)?;

		if i64::from(head.ofs_header) != -(base as i64) {
			return Err(GlmError::SurfacePositionMismatch {
				ofs_header: head.ofs_header,
				base,
			});
		}

		let num_bone_refs = reader.check_count("bone reference", head.num_bone_refs)?;
		let num_verts = reader.check_count("vertex", head.num_verts)?;
		let num_triangles = reader.check_count("triangle", head.num_triangles)?;

		reader.step("seeking surface bone references");
		reader.seek_relative_to(base, head.ofs_bone_refs)?;
		reader.step("reading surface bone references");
		let bone_references = reader.read_i32_array(num_bone_refs)?;

		reader.step("seeking surface vertices");
		reader.seek_relative_to(base, head.ofs_verts)?;
		reader.step("reading surface vertices");
		let mut vertices = bounded_vec(num_verts);
		for _ in 0..num_verts {
			vertices.push(PackedVertex::read(reader)?.unpack());
		}
		// UVs follow the whole vertex array instead of being interleaved.
		reader.step("reading surface texture coordinates");
		for vertex in &mut vertices {
			vertex.uv = [reader.read_f32_le()?, reader.read_f32_le()?];
		}

		reader.step("seeking surface triangles");
		reader.seek_relative_to(base, head.ofs_triangles)?;
		reader.step("reading surface triangles");
		let mut triangles = bounded_vec(num_triangles);
		for _ in 0..num_triangles {
			let indices = [reader.read_i32_le()?, reader.read_i32_le()?, reader.read_i32_le()?];
			triangles.push(Triangle { indices });
		}

		trace!(
			base,
			index = head.index,
			bone_refs = num_bone_refs,
			vertices = num_verts,
			triangles = num_triangles,
			"read surface"
		);

		Ok(Self {
			index: head.index,
			bone_references,
			triangles,
			vertices,
		})
	}
}
