//! # Chunk Creation Module
//!
//! This module provides a builder that fills a chunk's voxel array in storage
//! order. Generators push one code per cell, walking X fastest, then Y, then Z,
//! and hand the finished buffer to [`Chunk::load_voxels`].

use crate::engine_state::voxels::block::{is_solid, VoxelTypeCode, AIR};

use super::Chunk;

/// A builder for populating a chunk's voxels in storage order.
pub struct ChunkCreationIterator {
    /// Side length of the chunk being built
    size: usize,
    /// Voxel codes pushed so far
    voxels: Vec<VoxelTypeCode>,
    /// Number of solid codes pushed so far
    solid_count: usize,
}

impl ChunkCreationIterator {
    /// Creates a builder for a chunk with side length `size`.
    pub fn new(size: usize) -> Self {
        ChunkCreationIterator {
            size,
            voxels: Vec::with_capacity(size * size * size),
            solid_count: 0,
        }
    }

    /// Local coordinates of the next cell to be pushed.
    ///
    /// # Returns
    /// `None` once every cell has been pushed.
    pub fn next_position(&self) -> Option<(usize, usize, usize)> {
        let offset = self.voxels.len();
        if self.is_complete() {
            return None;
        }
        Some((
            offset % self.size,
            (offset / self.size) % self.size,
            offset / (self.size * self.size),
        ))
    }

    /// Adds a voxel at the current position and advances the position.
    ///
    /// Pushes past the end of the chunk are ignored.
    pub fn push_block_type(&mut self, code: VoxelTypeCode) {
        if self.is_complete() {
            return;
        }
        if is_solid(code) {
            self.solid_count += 1;
        }
        self.voxels.push(code);
    }

    /// Whether every cell has been pushed.
    pub fn is_complete(&self) -> bool {
        self.voxels.len() == self.size * self.size * self.size
    }

    /// Number of solid voxels pushed so far.
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }

    /// Finalizes the builder into `chunk`, padding any unpushed cells with air.
    pub fn fill_chunk(mut self, chunk: &mut Chunk) {
        while !self.is_complete() {
            self.voxels.push(AIR);
        }
        chunk.load_voxels(self.voxels);
    }
}
