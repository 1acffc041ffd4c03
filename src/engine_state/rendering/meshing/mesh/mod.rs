//! Mesh generation for voxel rendering.
//!
//! This module converts a chunk's voxel array into flat triangle buffers.
//!
//! # Architecture
//! - [`ChunkMesh`]: positions, normals, colors and triangle indices for one chunk
//! - [`Face`]: a single quad on the boundary of a voxel cell
//! - [`culled`]: emits one quad per solid face whose neighbor is air
//!
//! # Usage
//! ```no_run
//! use cgmath::Point3;
//! use voxel_arena::engine_state::{rendering::meshing::culled, voxels::chunk::Chunk};
//!
//! let mut chunk = Chunk::new(Point3::new(0, 0, 0), 16);
//! chunk.set(1, 1, 1, 1);
//! let mesh = culled(&chunk);
//! assert_eq!(mesh.quad_count(), 6);
//! ```

mod culled;
mod face;
mod mesh;

pub use culled::culled;
pub use face::Face;
pub use mesh::*;
