use glmdoc_testkit::{GlmBuilder, VertexSpec};

use crate::glm::{LodStats, Model, ModelStats};

#[test]
fn summarizes_humanoid() {
	let model = Model::from_bytes(&GlmBuilder::humanoid().build()).expect("model decodes");
	let stats = ModelStats::collect(&model);

	assert_eq!(
		stats.lods[0],
		LodStats {
			lod: 0,
			surfaces: 4,
			vertices: 12,
			triangles: 4,
			bone_references: 4,
		}
	);
	assert_eq!(stats.lods[1].vertices, 4);
	assert_eq!(stats.lods[1].triangles, 0);
	assert_eq!(stats.max_surface_vertices, 3);
	assert_eq!(stats.max_surface_triangles, 1);
	assert_eq!(stats.weight_histogram, [12, 0, 0, 0]);
}

#[test]
fn histogram_counts_active_weights() {
	let mut builder = GlmBuilder::single_vertex();
	let mut three = VertexSpec::at([0.0; 3], [0.0; 2]);
	three.compressed_weight_info = 2 << 30;
	builder.lods[0].surfaces[0].vertices.push(three);

	let model = Model::from_bytes(&builder.build()).expect("model decodes");
	assert_eq!(ModelStats::collect(&model).weight_histogram, [1, 0, 1, 0]);
}
