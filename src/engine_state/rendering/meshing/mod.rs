//! Mesh generation and hand-off for voxel rendering.
//!
//! This module owns the path from a chunk's voxels to the geometry the scene
//! layer draws. The key goals are:
//! 1. A chunk's mesh always matches its voxels once an edit call returns
//! 2. The render layer holds a stable handle per chunk and never copies geometry
//! 3. The render layer can tell a new mesh from an old one without diffing
//!
//! # Architecture
//! - `MeshHandle`: shared, single-threaded view of one chunk's current mesh
//! - `mesh/`: the face-culled meshing algorithm and mesh buffers

use std::{
    cell::{Cell, Ref, RefCell},
    rc::Rc,
};

use log::trace;

/// Core mesh generation algorithms and data structures.
mod mesh;

// Re-export the mesh module's public interface for external use
pub use mesh::*;

/// The state shared by every clone of a handle.
#[derive(Debug, Default)]
struct MeshSlot {
    /// The mesh readers see.
    current: RefCell<ChunkMesh>,
    /// A replacement that arrived while `current` was being read.
    pending: RefCell<Option<ChunkMesh>>,
    generation: Cell<u64>,
}

/// A single-threaded, reference-counted handle to a chunk's current mesh.
///
/// The chunk keeps one clone and replaces the mesh in place on every rebuild;
/// the scene layer keeps another and reads it on the next render pass. Every
/// replacement bumps [`MeshHandle::generation`], so a renderer can re-upload
/// only the chunks whose generation changed since it last looked.
///
/// A replacement that arrives while a guard from [`MeshHandle::get`] is alive
/// is held back and swapped in by the next `get` after the guard drops. The
/// generation is bumped immediately either way.
///
/// # Examples
///
/// ```
/// use voxel_arena::engine_state::rendering::meshing::{ChunkMesh, MeshHandle};
///
/// let handle = MeshHandle::new();
/// let observer = handle.clone();
/// assert_eq!(observer.generation(), 0);
///
/// handle.replace(ChunkMesh::new());
/// assert_eq!(observer.generation(), 1);
/// ```
///
/// # Performance Considerations
/// - Not thread-safe; chunks are generated and rendered on the same thread
/// - Cloning is a reference count bump
#[derive(Debug, Clone, Default)]
pub struct MeshHandle {
    slot: Rc<MeshSlot>,
}

impl MeshHandle {
    /// Creates a handle holding an empty mesh at generation 0.
    pub fn new() -> Self {
        MeshHandle::default()
    }

    /// Returns a guard that allows reading the latest mesh.
    pub fn get(&self) -> Ref<'_, ChunkMesh> {
        self.apply_pending();
        self.slot.current.borrow()
    }

    /// Number of times the mesh has been replaced.
    pub fn generation(&self) -> u64 {
        self.slot.generation.get()
    }

    /// Replaces the mesh and bumps the generation.
    pub fn replace(&self, mesh: ChunkMesh) {
        self.slot.generation.set(self.slot.generation.get() + 1);
        match self.slot.current.try_borrow_mut() {
            Ok(mut current) => {
                *current = mesh;
                self.slot.pending.borrow_mut().take();
            }
            Err(_) => {
                trace!("Mesh is being read, deferring replacement");
                *self.slot.pending.borrow_mut() = Some(mesh);
            }
        }
    }

    /// Whether two handles point at the same chunk's mesh.
    pub fn ptr_eq(&self, other: &MeshHandle) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    fn apply_pending(&self) {
        if let Ok(mut current) = self.slot.current.try_borrow_mut() {
            if let Some(mesh) = self.slot.pending.borrow_mut().take() {
                *current = mesh;
            }
        }
    }
}
