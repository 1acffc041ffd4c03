//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size cube of voxel codes
//! and the mesh derived from them.
//!
//! ## Storage
//!
//! Voxels live in one dense, flat array of `S³` codes. The cell at local
//! coordinates `(x, y, z)` is stored at index `x + y·S + z·S²`, so iterating the
//! array in order walks X fastest, then Y, then Z.
//!
//! ### Performance Characteristics
//! - **Lookup / Write**: O(1)
//! - **Mesh Rebuild**: O(S³), only on demand
//! - **Memory Usage**: 1 byte per voxel + mesh buffers
//!
//! ## Boundaries
//!
//! Out-of-range local coordinates are not an error. Reads return air and
//! writes are dropped, which is what lets face culling at the chunk edge treat
//! the unknown neighbor as open air.

use cgmath::Point3;
use log::{trace, warn};

use super::block::{is_solid, VoxelTypeCode, AIR};
use crate::engine_state::rendering::meshing::{culled, MeshHandle};

pub mod chunk_creation;
pub mod chunk_iteration;

/// Represents a cube of `size`³ voxels in the world.
///
/// Chunks are the unit of storage and of mesh generation. A chunk knows its
/// own position but nothing about its neighbors.
#[derive(Debug)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,
    /// Side length in voxels, fixed at construction.
    size: usize,
    /// Dense voxel codes, indexed `x + y·S + z·S²`.
    voxels: Vec<VoxelTypeCode>,
    /// Number of non-air entries in `voxels`.
    solid_count: usize,
    /// Set when `voxels` changed after the last mesh rebuild.
    dirty: bool,
    /// The mesh shared with the render layer.
    mesh: MeshHandle,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all voxels are air).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `size` - The side length in voxels
    pub fn new(position: Point3<i32>, size: usize) -> Self {
        Chunk {
            position,
            size,
            voxels: vec![AIR; size * size * size],
            solid_count: 0,
            dirty: false,
            mesh: MeshHandle::new(),
        }
    }

    /// Side length in voxels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// World-space coordinates of the minimum corner of this chunk.
    ///
    /// Saturates at the `i32` limits for chunks no world voxel can reach;
    /// [`VoxelWorld`](super::world::VoxelWorld) never registers those.
    pub fn origin(&self) -> Point3<i32> {
        let size = self.size.min(i32::MAX as usize) as i32;
        Point3::new(
            self.position.x.saturating_mul(size),
            self.position.y.saturating_mul(size),
            self.position.z.saturating_mul(size),
        )
    }

    /// Flat array index for local coordinates.
    ///
    /// # Returns
    /// `None` if any coordinate is outside `0..size`.
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let in_range = |c: i32| c >= 0 && (c as usize) < self.size;
        if in_range(x) && in_range(y) && in_range(z) {
            Some(x as usize + self.size * (y as usize + self.size * z as usize))
        } else {
            None
        }
    }

    /// Gets the voxel code at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// The stored code, or air for any out-of-range coordinate.
    pub fn get(&self, x: i32, y: i32, z: i32) -> VoxelTypeCode {
        match self.index(x, y, z) {
            Some(index) => self.voxels[index],
            None => AIR,
        }
    }

    /// Writes a voxel code at the specified chunk-relative coordinates.
    ///
    /// Out-of-range coordinates are ignored. The mesh is not rebuilt here so
    /// callers can coalesce several writes into one [`Chunk::rebuild_mesh`].
    ///
    /// # Returns
    /// `true` if the stored code changed.
    pub fn set(&mut self, x: i32, y: i32, z: i32, code: VoxelTypeCode) -> bool {
        let Some(index) = self.index(x, y, z) else {
            trace!(
                "Ignoring write outside chunk {:?} at ({}, {}, {})",
                self.position,
                x,
                y,
                z
            );
            return false;
        };

        let previous = std::mem::replace(&mut self.voxels[index], code);
        if previous == code {
            return false;
        }

        match (is_solid(previous), is_solid(code)) {
            (false, true) => self.solid_count += 1,
            (true, false) => self.solid_count -= 1,
            _ => {}
        }
        self.dirty = true;
        true
    }

    /// Replaces every voxel with `voxels`, which is laid out like the chunk's own array.
    ///
    /// A buffer of the wrong length is padded with air or truncated to `S³`.
    pub fn load_voxels(&mut self, mut voxels: Vec<VoxelTypeCode>) {
        let volume = self.size * self.size * self.size;
        if voxels.len() != volume {
            warn!(
                "Chunk {:?} expected {} voxels, got {}",
                self.position,
                volume,
                voxels.len()
            );
            voxels.resize(volume, AIR);
        }

        self.solid_count = voxels.iter().filter(|&&code| is_solid(code)).count();
        self.voxels = voxels;
        self.dirty = true;
    }

    /// Regenerates the whole mesh from the current voxels.
    ///
    /// The previous mesh is replaced, never patched.
    pub fn rebuild_mesh(&mut self) {
        self.mesh.replace(culled(self));
        self.dirty = false;
    }

    /// A handle to this chunk's mesh for the render layer.
    pub fn mesh(&self) -> MeshHandle {
        self.mesh.clone()
    }

    /// Whether voxels changed since the last mesh rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of solid voxels.
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }

    /// Whether every voxel is air.
    pub fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    /// The raw voxel array, indexed `x + y·S + z·S²`.
    pub fn voxels(&self) -> &[VoxelTypeCode] {
        &self.voxels
    }
}
