/// Parallel decode check command.
pub mod check;
/// Surface tree command.
pub mod hierarchy;
/// File-level information command.
pub mod info;
/// Per-LOD geometry listing command.
pub mod lods;
/// Single-surface geometry dump command.
pub mod surface;

pub(crate) mod util;
