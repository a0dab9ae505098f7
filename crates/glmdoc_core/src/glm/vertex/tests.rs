use proptest::prelude::*;

use crate::glm::{BoneWeights, MAX_WEIGHT, PackedVertex, unpack_bone_weights};

fn pack_indices(indices: [u32; 4]) -> u32 {
	indices.iter().enumerate().fold(0, |acc, (slot, index)| acc | (index << (5 * slot)))
}

#[test]
fn single_weight_takes_everything() {
	let weights = unpack_bone_weights(0, [0; 4]);
	assert_eq!(
		weights,
		BoneWeights {
			num_weights: 1,
			indices: [0; 4],
			raw_weights: [1023, 0, 0, 0],
		}
	);
	assert_eq!(weights.scaled(), [1023 << 6, 0, 0, 0]);
}

#[test]
fn single_weight_ignores_stored_bytes_and_later_indices() {
	let compressed = pack_indices([9, 17, 3, 30]) | (0xFF << 20);
	let weights = unpack_bone_weights(compressed, [200, 1, 2, 3]);
	assert_eq!(weights.indices, [9, 0, 0, 0]);
	assert_eq!(weights.raw_weights, [1023, 0, 0, 0]);
}

#[test]
fn two_weights_zero_unused_slots() {
	let compressed = (1 << 30) | pack_indices([7, 9, 31, 5]);
	let weights = unpack_bone_weights(compressed, [10, 99, 99, 99]);
	assert_eq!(weights.num_weights, 2);
	assert_eq!(weights.indices, [7, 9, 0, 0]);
	assert_eq!(weights.raw_weights, [10, 1013, 0, 0]);
}

#[test]
fn four_weights_use_high_bits_per_slot() {
	// Slot 0 gets high bit pattern 01 (bit 20), slots 1 and 2 none.
	let compressed = (3 << 30) | (1 << 20) | pack_indices([1, 2, 3, 4]);
	let weights = unpack_bone_weights(compressed, [100, 200, 50, 77]);
	assert_eq!(weights.num_weights, 4);
	assert_eq!(weights.indices, [1, 2, 3, 4]);
	assert_eq!(weights.raw_weights, [356, 200, 50, 417]);
}

#[test]
fn high_bits_of_each_slot_are_independent() {
	// Slot 1 high bits are bits 22..24, slot 2 high bits are 24..26.
	let compressed = (3 << 30) | (0b10 << 22) | (0b11 << 24);
	let weights = unpack_bone_weights(compressed, [0, 1, 2, 0]);
	assert_eq!(weights.raw_weights[..3], [0, 0x201, 0x302]);
	assert_eq!(weights.raw_weights[3], MAX_WEIGHT - 0x201 - 0x302);
}

#[test]
fn overfull_weights_wrap_like_sixteen_bit_storage() {
	let compressed = (3 << 30) | (0x3F << 20);
	let weights = unpack_bone_weights(compressed, [255, 255, 255, 0]);
	assert_eq!(weights.raw_weights, [1023, 1023, 1023, -2046]);
	assert_eq!(weights.scaled()[3], 128);
}

#[test]
fn packed_vertex_passes_geometry_through() {
	let packed = PackedVertex {
		normal: [0.0, 1.0, 0.0],
		position: [4.0, 5.0, 6.0],
		compressed_weight_info: (1 << 30) | pack_indices([2, 6, 0, 0]),
		raw_bone_weights: [0x80, 0, 0, 0],
	};
	let vertex = packed.unpack();
	assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
	assert_eq!(vertex.position, [4.0, 5.0, 6.0]);
	assert_eq!(vertex.uv, [0.0, 0.0]);
	assert_eq!(vertex.num_weights, 2);
	assert_eq!(vertex.bone_indices, [2, 6, 0, 0]);
	assert_eq!(vertex.bone_weights, [0x80 << 6, (1023 - 0x80) << 6, 0, 0]);
}

proptest! {
	#[test]
	fn active_weights_sum_to_max(compressed in any::<u32>(), raw in any::<[u8; 4]>()) {
		let weights = unpack_bone_weights(compressed, raw);
		let active = usize::from(weights.num_weights);
		let sum: i32 = weights.raw_weights[..active].iter().map(|weight| i32::from(*weight)).sum();
		prop_assert_eq!(sum, i32::from(MAX_WEIGHT));
	}

	#[test]
	fn inactive_slots_are_zero(compressed in any::<u32>(), raw in any::<[u8; 4]>()) {
		let weights = unpack_bone_weights(compressed, raw);
		prop_assert_eq!(u32::from(weights.num_weights), (compressed >> 30) + 1);
		for slot in usize::from(weights.num_weights)..4 {
			prop_assert_eq!(weights.indices[slot], 0);
			prop_assert_eq!(weights.raw_weights[slot], 0);
			prop_assert_eq!(weights.scaled()[slot], 0);
		}
	}

	#[test]
	fn active_indices_come_from_low_bits(compressed in any::<u32>(), raw in any::<[u8; 4]>()) {
		let weights = unpack_bone_weights(compressed, raw);
		for slot in 0..usize::from(weights.num_weights) {
			prop_assert_eq!(u32::from(weights.indices[slot]), (compressed >> (5 * slot)) & 0x1F);
		}
	}

	#[test]
	fn single_weight_boundary(low in 0_u32..(1 << 30), raw in any::<[u8; 4]>()) {
		let weights = unpack_bone_weights(low, raw);
		prop_assert_eq!(weights.raw_weights, [1023, 0, 0, 0]);
		prop_assert_eq!(weights.scaled(), [1023 << 6, 0, 0, 0]);
	}
}
