mod error;
mod header;
mod hierarchy;
mod lod;
mod model;
mod stats;
mod stream;
mod surface;
mod vertex;
mod walk;

/// Error and result aliases.
pub use error::{ErrorKind, GlmError, Result};
/// File header representation.
pub use header::GlmHeader;
/// Surface hierarchy records and block reader.
pub use hierarchy::{SurfaceHierarchy, SurfaceHierarchyEntry};
/// Level-of-detail block.
pub use lod::Lod;
/// Decoded model and decoder limits.
pub use model::{DecodeOptions, Model};
/// Geometry summaries.
pub use stats::{LodStats, ModelStats};
/// Seekable little-endian stream reader.
pub use stream::{GlmReader, NAME_LEN, PREALLOC_LIMIT, bounded_vec, fixed_name};
/// Surface geometry records.
pub use surface::{Surface, Triangle};
/// Vertex records and the packed bone weight codec.
pub use vertex::{BoneWeights, MAX_WEIGHT, PackedVertex, Vertex, WEIGHT_SHIFT, unpack_bone_weights};
/// Surface tree traversal.
pub use walk::{WalkItem, WalkOptions, WalkResult, WalkSkip, WalkSkipReason, walk_hierarchy};
