//! Public library API for decoding Ghoul2 `.glm` model files.

/// Header, hierarchy, LOD and surface decoding plus model queries.
pub mod glm;
