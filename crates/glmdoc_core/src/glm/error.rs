use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GlmError>;

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Stream open, read, or seek failure.
	Io,
	/// Wrong identity, wrong version, or an invalid count field.
	Format,
	/// Self-consistency check failed in otherwise readable data.
	Structural,
	/// Lookup into an already decoded model was out of range.
	Query,
}

impl ErrorKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Io => "io",
			Self::Format => "format",
			Self::Structural => "structural",
			Self::Query => "query",
		}
	}
}

/// Errors produced while decoding or querying `.glm` data.
#[derive(Debug, Error)]
pub enum GlmError {
	/// Underlying stream failure, tagged with the decode step.
	#[error("{context}: {source}")]
	Io {
		/// Decode step that issued the failing read or seek.
		context: &'static str,
		/// Error reported by the stream.
		#[source]
		source: std::io::Error,
	},
	/// File does not start with `2LGM`.
	#[error("no valid Ghoul2 model: invalid identifier {ident:?}")]
	InvalidIdent {
		/// First four bytes of the stream.
		ident: [u8; 4],
	},
	/// Header version is not the supported one.
	#[error("no valid Ghoul2 model: invalid version {version} (expected 6)")]
	InvalidVersion {
		/// Parsed version.
		version: i32,
	},
	/// Header bone, LOD or surface count was negative.
	#[error("invalid values: bones={num_bones}, lods={num_lods}, surfaces={num_surfaces}")]
	InvalidHeaderCounts {
		/// Parsed bone count.
		num_bones: i32,
		/// Parsed LOD count.
		num_lods: i32,
		/// Parsed surface count.
		num_surfaces: i32,
	},
	/// A count field inside a hierarchy entry or surface was negative.
	#[error("invalid values: negative {kind} count {count}")]
	NegativeCount {
		/// Which count field.
		kind: &'static str,
		/// Parsed signed count.
		count: i32,
	},
	/// A count field exceeded the configured element limit.
	#[error("{kind} count {count} exceeds limit {max}")]
	CountTooLarge {
		/// Which count field.
		kind: &'static str,
		/// Parsed count.
		count: usize,
		/// Configured ceiling.
		max: usize,
	},
	/// No hierarchy entry has parent index `-1`.
	#[error("broken hierarchy: none of {entries} surfaces is a root")]
	BrokenHierarchy {
		/// Number of hierarchy entries read.
		entries: usize,
	},
	/// Surface back-pointer does not cancel its own file position.
	#[error("surface file position mismatch: ofs_header={ofs_header}, base={base}")]
	SurfacePositionMismatch {
		/// Stored back-pointer.
		ofs_header: i32,
		/// Actual stream position of the surface.
		base: u64,
	},
	/// No hierarchy entry carries the requested name.
	#[error("surface not found: {name}")]
	SurfaceNameNotFound {
		/// Requested surface name.
		name: String,
	},
	/// Requested LOD does not exist.
	#[error("lod index {lod} out of range (count={count})")]
	LodOutOfRange {
		/// Requested LOD index.
		lod: usize,
		/// Number of LODs in the model.
		count: usize,
	},
	/// Requested surface does not exist in the LOD.
	#[error("surface index {surface} out of range in lod {lod} (count={count})")]
	SurfaceOutOfRange {
		/// LOD searched.
		lod: usize,
		/// Requested surface index.
		surface: usize,
		/// Number of surfaces per LOD.
		count: usize,
	},
}

impl GlmError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io { .. } => ErrorKind::Io,
			Self::InvalidIdent { .. }
			| Self::InvalidVersion { .. }
			| Self::InvalidHeaderCounts { .. }
			| Self::NegativeCount { .. }
			| Self::CountTooLarge { .. } => ErrorKind::Format,
			Self::BrokenHierarchy { .. } | Self::SurfacePositionMismatch { .. } => ErrorKind::Structural,
			Self::SurfaceNameNotFound { .. } | Self::LodOutOfRange { .. } | Self::SurfaceOutOfRange { .. } => ErrorKind::Query,
		}
	}

	pub(crate) fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
		move |source| Self::Io { context, source }
	}
}
