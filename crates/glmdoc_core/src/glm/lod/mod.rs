use std::io::{Read, Seek};

use tracing::debug;

use crate::glm::{GlmReader, Result, Surface, bounded_vec};

/// One complete mesh resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Lod {
	/// Surfaces in hierarchy order.
	pub surfaces: Vec<Surface>,
}

impl Lod {
	/// Read one LOD block starting at the reader's current position.
	///
	/// The reader always ends at `base + ofs_end`, however far the surface
	/// reads went, so undescribed trailing bytes are skipped.
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>, num_surfaces: usize) -> Result<Self> {
		reader.step("locating lod");
		let base = reader.tell()?;
		reader.step("reading lod end offset");
		let ofs_end = reader.read_i32_le()?;

		let mut surfaces = bounded_vec(num_surfaces);
		for _ in 0..num_surfaces {
			surfaces.push(Surface::read(reader)?);
		}

		reader.step("seeking next lod");
		reader.seek_relative_to(base, ofs_end)?;

		debug!(base, ofs_end, surfaces = surfaces.len(), "read lod");
		Ok(Self { surfaces })
	}

	/// Total vertices over all surfaces.
	pub fn vertex_count(&self) -> usize {
		self.surfaces.iter().map(|surface| surface.vertices.len()).sum()
	}

	/// Total triangles over all surfaces.
	pub fn triangle_count(&self) -> usize {
		self.surfaces.iter().map(|surface| surface.triangles.len()).sum()
	}
}
