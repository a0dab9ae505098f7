use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use tracing::debug;

use crate::glm::{GlmError, GlmHeader, GlmReader, Lod, Result, Surface, SurfaceHierarchy, SurfaceHierarchyEntry, bounded_vec};

/// Decoder limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Largest count accepted for any single array before allocating it.
	pub max_elements: usize,
}

impl DecodeOptions {
	/// Default for [`DecodeOptions::max_elements`].
	pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 24;
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_elements: Self::DEFAULT_MAX_ELEMENTS,
		}
	}
}

/// Fully decoded Ghoul2 model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	header: GlmHeader,
	hierarchy: Vec<SurfaceHierarchyEntry>,
	roots: Vec<usize>,
	lods: Vec<Lod>,
}

impl Model {
	/// Open and decode a model file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_options(path, &DecodeOptions::default())
	}

	/// Open and decode a model file with explicit limits.
	pub fn open_with_options(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
		let file = File::open(path).map_err(GlmError::io("opening file"))?;
		Self::decode_with_options(BufReader::new(file), options)
	}

	/// Decode a model held in memory.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Self::decode(Cursor::new(bytes))
	}

	/// Decode a model from a seekable stream.
	pub fn decode<R: Read + Seek>(reader: R) -> Result<Self> {
		Self::decode_with_options(reader, &DecodeOptions::default())
	}

	/// Decode a model from a seekable stream with explicit limits.
	///
	/// Reads header, hierarchy and LODs in that order. Any failure aborts the
	/// whole decode.
	pub fn decode_with_options<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Self> {
		let mut reader = GlmReader::with_options(reader, options);
		reader.step("seeking file header");
		reader.seek_to(0)?;

		let header = GlmHeader::read(&mut reader)?;
		let num_surfaces = reader.check_count("surface", header.num_surfaces)?;
		let num_lods = reader.check_count("lod", header.num_lods)?;

		let SurfaceHierarchy { entries, roots } = SurfaceHierarchy::read(&mut reader, header.ofs_surf_hierarchy, num_surfaces)?;

		reader.step("seeking lods");
		reader.seek_to(i64::from(header.ofs_lods))?;
		let mut lods = bounded_vec(num_lods);
		for _ in 0..num_lods {
			lods.push(Lod::read(&mut reader, num_surfaces)?);
		}

		debug!(name = %header.name, surfaces = num_surfaces, lods = lods.len(), roots = roots.len(), "decoded model");
		Ok(Self {
			header,
			hierarchy: entries,
			roots,
			lods,
		})
	}

	/// Parsed file header.
	pub fn header(&self) -> &GlmHeader {
		&self.header
	}

	/// Model name.
	pub fn name(&self) -> &str {
		&self.header.name
	}

	/// Animation file name.
	pub fn anim_name(&self) -> &str {
		&self.header.anim_name
	}

	/// Bone count of the bound skeleton.
	pub fn num_bones(&self) -> u32 {
		self.header.num_bones as u32
	}

	/// Hierarchy entries by position.
	pub fn hierarchy(&self) -> &[SurfaceHierarchyEntry] {
		&self.hierarchy
	}

	/// Positions of root entries, ascending.
	pub fn root_indices(&self) -> &[usize] {
		&self.roots
	}

	/// Root entries with their positions.
	pub fn roots(&self) -> impl Iterator<Item = (usize, &SurfaceHierarchyEntry)> + '_ {
		self.roots.iter().map(|index| (*index, &self.hierarchy[*index]))
	}

	/// Child positions of entry `index` that name an existing entry.
	pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
		let len = self.hierarchy.len();
		self.hierarchy
			.get(index)
			.map(|entry| entry.child_indices.as_slice())
			.unwrap_or_default()
			.iter()
			.filter_map(move |child| usize::try_from(*child).ok().filter(|child| *child < len))
	}

	/// Position of the first hierarchy entry named `name`.
	pub fn find_surface(&self, name: &str) -> Result<usize> {
		self.hierarchy
			.iter()
			.position(|entry| entry.name == name)
			.ok_or_else(|| GlmError::SurfaceNameNotFound { name: name.to_owned() })
	}

	/// All LODs, most detailed first.
	pub fn lods(&self) -> &[Lod] {
		&self.lods
	}

	/// LOD by index.
	pub fn lod(&self, lod: usize) -> Option<&Lod> {
		self.lods.get(lod)
	}

	/// Surface by LOD and hierarchy position.
	pub fn surface(&self, lod: usize, surface: usize) -> Option<&Surface> {
		self.lod(lod).and_then(|item| item.surfaces.get(surface))
	}

	/// LOD by index, or [`GlmError::LodOutOfRange`].
	pub fn lod_checked(&self, lod: usize) -> Result<&Lod> {
		self.lod(lod).ok_or(GlmError::LodOutOfRange {
			lod,
			count: self.lods.len(),
		})
	}

	/// Surface by LOD and position, or a range error naming what was missing.
	pub fn surface_checked(&self, lod: usize, surface: usize) -> Result<&Surface> {
		let item = self.lod_checked(lod)?;
		item.surfaces.get(surface).ok_or(GlmError::SurfaceOutOfRange {
			lod,
			surface,
			count: item.surfaces.len(),
		})
	}
}
