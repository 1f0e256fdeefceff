//! Probe data model: lattices, baked index/SH buffers, and the volumes
//! that bind them.

pub mod constants;
pub mod data_buffer;
pub mod error;
pub mod grid;
pub mod index_buffer;
pub mod lighting;
pub mod math;
pub mod types;
pub mod volume;

pub use data_buffer::DataBuffer;
pub use error::ProbeError;
pub use grid::ProbeGrid;
pub use index_buffer::IndexBuffer;
pub use lighting::ProbeLighting;
pub use types::{DataSlot, ShRecord};
pub use volume::{ProbePoint, ProbeVolume};
