use std::io::{Cursor, Read, Seek};

use tracing::debug;

use crate::glm::{GlmError, GlmReader, Result};

/// Parsed `.glm` file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlmHeader {
	/// Four-byte identifier, always `2LGM` once validated.
	pub ident: [u8; 4],
	/// Format version, always 6 once validated.
	pub version: i32,
	/// Model name.
	pub name: String,
	/// Animation file name.
	pub anim_name: String,
	/// Animation index, free for application use.
	pub anim_index: i32,
	/// Bone count of the skeleton this model binds to.
	pub num_bones: i32,
	/// Number of LOD blocks.
	pub num_lods: i32,
	/// Absolute offset of the first LOD block.
	pub ofs_lods: i32,
	/// Surfaces per LOD, and hierarchy entries.
	pub num_surfaces: i32,
	/// Absolute offset of the hierarchy block.
	pub ofs_surf_hierarchy: i32,
	/// Stored end offset. Informational: LOD blocks need not be sequential,
	/// so this is never checked against the data actually read.
	pub ofs_end: i32,
}

impl GlmHeader {
	/// Required identifier.
	pub const IDENT: [u8; 4] = *b"2LGM";
	/// Supported format version.
	pub const VERSION: i32 = 6;
	/// Stored header size in bytes.
	pub const SIZE: usize = 4 + 4 + 64 + 64 + 4 * 7;

	/// Read and validate a header at the reader's current position.
	pub fn read<R: Read + Seek>(reader: &mut GlmReader<R>) -> Result<Self> {
		reader.step("reading file header");
		let header = Self {
			ident: reader.read_ident()?,
			version: reader.read_i32_le()?,
			name: reader.read_name()?,
			anim_name: reader.read_name()?,
			anim_index: reader.read_i32_le()?,
			num_bones: reader.read_i32_le()?,
			num_lods: reader.read_i32_le()?,
			ofs_lods: reader.read_i32_le()?,
			num_surfaces: reader.read_i32_le()?,
			ofs_surf_hierarchy: reader.read_i32_le()?,
			ofs_end: reader.read_i32_le()?,
		};
		header.validate()?;

		debug!(
			name = %header.name,
			bones = header.num_bones,
			lods = header.num_lods,
			surfaces = header.num_surfaces,
			ofs_lods = header.ofs_lods,
			ofs_hierarchy = header.ofs_surf_hierarchy,
			"read glm header"
		);
		Ok(header)
	}

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		Self::read(&mut GlmReader::new(Cursor::new(bytes)))
	}

	fn validate(&self) -> Result<()> {
		if self.ident != Self::IDENT {
			return Err(GlmError::InvalidIdent { ident: self.ident });
		}
		if self.version != Self::VERSION {
			return Err(GlmError::InvalidVersion { version: self.version });
		}
		if self.num_bones < 0 || self.num_lods < 0 || self.num_surfaces < 0 {
			return Err(GlmError::InvalidHeaderCounts {
				num_bones: self.num_bones,
				num_lods: self.num_lods,
				num_surfaces: self.num_surfaces,
			});
		}
		Ok(())
	}
}
