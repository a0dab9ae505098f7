use crate::glm::Model;

/// Totals for one LOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LodStats {
	/// LOD index.
	pub lod: usize,
	/// Surface count.
	pub surfaces: usize,
	/// Vertices over all surfaces.
	pub vertices: usize,
	/// Triangles over all surfaces.
	pub triangles: usize,
	/// Bone references over all surfaces.
	pub bone_references: usize,
}

/// Whole-model geometry summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
	/// Per-LOD totals, most detailed first.
	pub lods: Vec<LodStats>,
	/// Largest vertex count of any single surface.
	pub max_surface_vertices: usize,
	/// Largest triangle count of any single surface.
	pub max_surface_triangles: usize,
	/// LOD 0 vertices by number of active weights; slot `i` counts `i + 1` weights.
	pub weight_histogram: [usize; 4],
}

impl ModelStats {
	/// Summarize a decoded model.
	pub fn collect(model: &Model) -> Self {
		let mut stats = Self {
			lods: Vec::with_capacity(model.lods().len()),
			max_surface_vertices: 0,
			max_surface_triangles: 0,
			weight_histogram: [0; 4],
		};

		for (index, lod) in model.lods().iter().enumerate() {
			let mut row = LodStats {
				lod: index,
				surfaces: lod.surfaces.len(),
				vertices: 0,
				triangles: 0,
				bone_references: 0,
			};
			for surface in &lod.surfaces {
				row.vertices += surface.vertices.len();
				row.triangles += surface.triangles.len();
				row.bone_references += surface.bone_references.len();
				stats.max_surface_vertices = stats.max_surface_vertices.max(surface.vertices.len());
				stats.max_surface_triangles = stats.max_surface_triangles.max(surface.triangles.len());
			}
			stats.lods.push(row);
		}

		if let Some(lod) = model.lods().first() {
			for vertex in lod.surfaces.iter().flat_map(|surface| &surface.vertices) {
				let slot = usize::from(vertex.num_weights.clamp(1, 4)) - 1;
				stats.weight_histogram[slot] += 1;
			}
		}

		stats
	}
}

#[cfg(test)]
mod tests;
