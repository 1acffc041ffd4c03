//! Vertex data structures for voxel rendering.
//!
//! This module defines the interleaved vertex format handed to the GPU upload
//! path. The flat buffers in [`ChunkMesh`](super::meshing::ChunkMesh) are the
//! canonical mesh; this type is their packed form.

/// A vertex in the voxel rendering pipeline.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes), chunk-local
/// - Normal: 3x f32 (12 bytes)
/// - Color: 3x f32 (12 bytes), linear RGB
///
/// Total size: 36 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position relative to the chunk origin
    pub position: [f32; 3],
    /// Flat face normal
    pub normal: [f32; 3],
    /// Jittered material color
    pub color: [f32; 3],
}

impl Vertex {
    /// Size of one vertex in bytes, the stride of an interleaved vertex buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Creates a new vertex with the given attributes.
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 3]) -> Self {
        Vertex {
            position,
            normal,
            color,
        }
    }
}
