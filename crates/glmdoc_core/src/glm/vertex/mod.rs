//! Vertex storage and the packed bone index/weight codec.
//!
//! Each stored vertex carries a 32-bit word and four bytes that together hold
//! up to four `(bone, weight)` pairs:
//!
//! - bits 0..20: four 5-bit bone indices, slot `i` at bit `5 * i`
//! - bits 20..28: the high two bits of the 10-bit weights of slots 0..3
//! - bits 30..32: number of active weights minus one
//!
//! The low eight weight bits live in the separate byte array. The last active
//! weight is never stored; it is whatever remains of [`MAX_WEIGHT`].

use std::io::{Read, Seek};

use crate::glm::{GlmReader, Result};

/// Sum of the active weights of every vertex.
pub const MAX_WEIGHT: i16 = (1 << 10) - 1;
/// Shift that spreads a 10-bit weight over the 16-bit output range.
pub const WEIGHT_SHIFT: u32 = 16 - 10;

/// Decoded bone binding of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoneWeights {
	/// Number of active slots, 1 to 4.
	pub num_weights: u8,
	/// Bone reference slot per weight; zero for inactive slots.
	pub indices: [u8; 4],
	/// 10-bit weights before the output shift; zero for inactive slots.
	pub raw_weights: [i16; 4],
}

impl BoneWeights {
	/// Weights shifted into the 16-bit range, normalized by dividing by 65535.
	pub fn scaled(&self) -> [u16; 4] {
		self.raw_weights.map(|weight| (i32::from(weight) << WEIGHT_SHIFT) as u16)
	}
}

/// Unpack the compressed bone index/weight field of one vertex.
pub fn unpack_bone_weights(compressed: u32, raw: [u8; 4]) -> BoneWeights {
	let num_weights = (compressed >> 30) + 1;

	let mut indices = [0_u8; 4];
	let mut raw_weights = [0_i16; 4];
	let mut total = 0_i16;

	for slot in 0..4_u32 {
		let i = slot as usize;
		indices[i] = ((compressed >> (5 * slot)) & 0x1F) as u8;

		raw_weights[i] = if slot < num_weights - 1 {
			let weight = i16::from(raw[i]) | ((compressed >> (12 + 2 * slot)) & 0x300) as i16;
			total += weight;
			weight
		} else if slot == num_weights - 1 {
			MAX_WEIGHT - total
		} else {
			indices[i] = 0;
			0
		};
	}

	BoneWeights {
		num_weights: num_weights as u8,
		indices,
		raw_weights,
	}
}

/// One fully decoded vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
	/// Normal vector.
	pub normal: [f32; 3],
	/// Position.
	pub position: [f32; 3],
	/// Texture coordinate.
	pub uv: [f32; 2],
	/// Number of active bone slots, 1 to 4.
	pub num_weights: u8,
	/// Bone reference slots.
	pub bone_indices: [u8; 4],
	/// Weights over the full `u16` range.
	pub bone_weights: [u16; 4],
}

/// Vertex fields as stored, before the weight field is unpacked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedVertex {
	/// Normal vector.
	pub normal: [f32; 3],
	/// Position.
	pub position: [f32; 3],
	/// Packed index/weight word.
	pub compressed_weight_info: u32,
	/// Low eight bits of each stored weight.
	pub raw_bone_weights: [u8; 4],
}

impl PackedVertex {
	/// Read the interleaved part of a vertex (everything but its UV).
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>) -> Result<Self> {
		Ok(Self {
			normal: reader.read_vec3()?,
			position: reader.read_vec3()?,
			compressed_weight_info: reader.read_u32_le()?,
			raw_bone_weights: reader.read_bytes()?,
		})
	}

	/// Decode bone bindings. The UV is left zero; it is stored separately.
	pub fn unpack(&self) -> Vertex {
		let weights = unpack_bone_weights(self.compressed_weight_info, self.raw_bone_weights);
		Vertex {
			normal: self.normal,
			position: self.position,
			uv: [0.0; 2],
			num_weights: weights.num_weights,
			bone_indices: weights.indices,
			bone_weights: weights.scaled(),
		}
	}
}

#[cfg(test)]
mod tests;
