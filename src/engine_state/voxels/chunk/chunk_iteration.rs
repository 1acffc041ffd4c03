//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid voxels of a chunk.
//!
//! The iterator walks the flat voxel array in storage order (X fastest, then Y,
//! then Z), skips air, and decodes each array index back into local coordinates.

use cgmath::Point3;

use crate::engine_state::voxels::block::{is_solid, VoxelTypeCode};

use super::Chunk;

/// An iterator over all non-air voxels in a chunk.
///
/// Yields `(local position, voxel code)` pairs.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next position in the voxel array
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first voxel.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }

    fn local_position(&self, offset: usize) -> Point3<i32> {
        let size = self.chunk_ref.size();
        Point3::new(
            (offset % size) as i32,
            ((offset / size) % size) as i32,
            (offset / (size * size)) as i32,
        )
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, VoxelTypeCode);

    fn next(&mut self) -> Option<Self::Item> {
        let voxels = self.chunk_ref.voxels();

        while self.current_offset < voxels.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let code = voxels[offset];
            if is_solid(code) {
                return Some((self.local_position(offset), code));
            }
        }

        None
    }
}
