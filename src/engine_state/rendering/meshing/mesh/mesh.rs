//! Mesh data structures for voxel rendering.
//!
//! This module provides the flat buffers a chunk's geometry is written into
//! and the conversion to the interleaved GPU vertex format.

use super::face::Face;
use crate::engine_state::rendering::Vertex;

/// Maximum relative change applied to a vertex color by the weathering jitter.
pub const COLOR_JITTER: f32 = 0.08;

/// Triangle geometry for one chunk.
///
/// Every buffer is indexed by vertex: `positions[3k..3k + 3]`, `normals[3k..3k + 3]`
/// and `colors[3k..3k + 3]` belong to vertex `k`. `indices` lists triangles as
/// triples of vertex indices, two triangles per quad.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Chunk-local vertex positions
    pub positions: Vec<f32>,
    /// Flat per-face normals, repeated for each vertex of the face
    pub normals: Vec<f32>,
    /// Per-vertex RGB colors
    pub colors: Vec<f32>,
    /// Triangle list into the vertex buffers
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    /// Creates an empty mesh with room for `faces` quads.
    pub fn with_face_capacity(faces: usize) -> Self {
        ChunkMesh {
            positions: Vec::with_capacity(faces * 12),
            normals: Vec::with_capacity(faces * 12),
            colors: Vec::with_capacity(faces * 12),
            indices: Vec::with_capacity(faces * 6),
        }
    }

    /// Appends one quad for `face` with the given base color.
    ///
    /// Each of the four vertices gets its own random multiplicative jitter on
    /// top of `base_color`, so two rebuilds of the same voxels differ only in color.
    pub fn push_face(&mut self, face: &Face, base_color: [f32; 3]) {
        let num_faces_generated = self.quad_count() as u32;
        let normal = face.block_side.normal();

        for corner in face.corners() {
            self.positions
                .extend_from_slice(&[corner.x as f32, corner.y as f32, corner.z as f32]);
            self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            self.colors.extend_from_slice(&jitter_color(base_color));
        }

        self.indices
            .extend_from_slice(&Self::generate_face_indices(num_faces_generated));
    }

    /// Generates index data for a face, adjusted by the number of previously generated faces.
    ///
    /// # Returns
    /// Six indices forming the triangles `ll, lr, ur` and `ll, ur, ul`.
    pub fn generate_face_indices(num_faces_generated: u32) -> [u32; 6] {
        let base = num_faces_generated * 4;
        [base, base + 1, base + 3, base, base + 3, base + 2]
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads (visible voxel faces) in the mesh.
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    /// Whether the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Packs the flat buffers into interleaved vertices.
    pub fn interleaved(&self) -> Vec<Vertex> {
        (0..self.vertex_count())
            .map(|k| {
                let range = 3 * k..3 * k + 3;
                Vertex::new(
                    to_array(&self.positions[range.clone()]),
                    to_array(&self.normals[range.clone()]),
                    to_array(&self.colors[range]),
                )
            })
            .collect()
    }

    /// The index buffer as raw bytes, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

fn to_array(slice: &[f32]) -> [f32; 3] {
    [slice[0], slice[1], slice[2]]
}

fn jitter_color(base_color: [f32; 3]) -> [f32; 3] {
    let factor = 1.0 + (fastrand::f32() * 2.0 - 1.0) * COLOR_JITTER;
    base_color.map(|channel| (channel * factor).clamp(0.0, 1.0))
}
