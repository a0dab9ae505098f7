use std::io::{Read, Seek};

use tracing::{debug, trace};

use crate::glm::{GlmError, GlmReader, Result, bounded_vec};

/// One node of the surface attachment tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHierarchyEntry {
	/// Surface name.
	pub name: String,
	/// Surface flag bitmask.
	pub flags: u32,
	/// Shader name.
	pub shader: String,
	/// Parent entry index, `-1` for roots.
	pub parent_index: i32,
	/// Child entry indices in stored order.
	pub child_indices: Vec<i32>,
}

impl SurfaceHierarchyEntry {
	/// Parent index that marks a root entry.
	pub const ROOT_PARENT: i32 = -1;

	/// Return `true` when this entry has no parent.
	pub fn is_root(&self) -> bool {
		self.parent_index == Self::ROOT_PARENT
	}

	/// Parent index as a hierarchy position, `None` for roots and invalid values.
	pub fn parent(&self) -> Option<usize> {
		usize::try_from(self.parent_index).ok()
	}

	/// Read one entry at the reader's current position.
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>) -> Result<Self> {
		reader.step("reading surface hierarchy");
		let name = reader.read_name()?;
		let flags = reader.read_u32_le()?;
		let shader = reader.read_name()?;
		let _shader_index = reader.read_i32_le()?;
		let parent_index = reader.read_i32_le()?;
		let num_children = reader.read_count("hierarchy child")?;
		let child_indices = reader.read_i32_array(num_children)?;

		Ok(Self {
			name,
			flags,
			shader,
			parent_index,
			child_indices,
		})
	}
}

/// Decoded hierarchy block: entries by position plus the root set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHierarchy {
	/// Entries in offset-table order.
	pub entries: Vec<SurfaceHierarchyEntry>,
	/// Positions of entries whose parent is `-1`, ascending.
	pub roots: Vec<usize>,
}

impl SurfaceHierarchy {
	/// Read the hierarchy block starting at absolute `offset`.
	///
	/// Entries are located through the offset table and read by seeking, so
	/// their storage order in the file does not matter.
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>, offset: i32, num_surfaces: usize) -> Result<Self> {
		reader.step("seeking hierarchy offsets");
		reader.seek_to(i64::from(offset))?;
		let base = reader.tell()?;

		reader.step("reading hierarchy offsets");
		let offsets = reader.read_i32_array(num_surfaces)?;

		let mut entries = bounded_vec(num_surfaces);
		for (index, relative) in offsets.iter().enumerate() {
			reader.step("seeking hierarchy entry");
			reader.seek_relative_to(base, *relative)?;
			let entry = SurfaceHierarchyEntry::read(reader)?;
			trace!(index, name = %entry.name, parent = entry.parent_index, children = entry.child_indices.len(), "read hierarchy entry");
			entries.push(entry);
		}

		let roots: Vec<usize> = entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| entry.is_root())
			.map(|(index, _)| index)
			.collect();
		if roots.is_empty() {
			return Err(GlmError::BrokenHierarchy { entries: entries.len() });
		}

		debug!(entries = entries.len(), roots = roots.len(), "read surface hierarchy");
		Ok(Self { entries, roots })
	}
}
