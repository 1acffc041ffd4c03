//! # Voxel Engine Core
//!
//! This module contains the core voxel functionality: representing, editing
//! and generating a block-structured world.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Voxel type codes, the shared descriptor table and the six cell faces
//! * **Chunk**: Fixed-size 3D arrays of voxel codes plus the mesh derived from them
//! * **World**: Sparse chunk registry with world-space get/set and remeshing
//! * **Coords**: Floor-division split of world coordinates into chunk + local
//! * **Terrain**: Deterministic height-map generation
//! * **Raycast**: First-solid-voxel queries along a ray
//!
//! ## Data Flow
//!
//! 1. World receives a request to read or write a voxel
//! 2. World resolves the chunk coordinate and local offset
//! 3. The chunk mutates its voxel array
//! 4. The chunk rebuilds its mesh before the call returns
//!
//! ## Thread Safety
//!
//! Everything here runs on the render-loop thread. Nothing is `Sync` and no
//! locks are taken.

pub mod block;
pub mod chunk;
pub mod coords;
pub mod raycast;
pub mod terrain;
pub mod world;
