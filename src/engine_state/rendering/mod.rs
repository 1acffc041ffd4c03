//! # Rendering Module
//!
//! Everything the scene layer needs to draw voxel chunks: the culled meshing
//! algorithm, the per-chunk mesh handle and the packed vertex format.
//!
//! The engine does not own a camera, lights or a scene graph. It only
//! guarantees that every chunk's [`meshing::MeshHandle`] holds geometry that
//! matches the chunk's voxels.

pub mod meshing;
mod vertex;

pub use vertex::Vertex;
