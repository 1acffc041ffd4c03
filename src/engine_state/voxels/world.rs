//! # World Module
//!
//! This module provides the `VoxelWorld` struct which manages a collection of chunks in the voxel world.
//! It serves as the central coordinator for chunk generation, voxel access and remeshing.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been
//! generated are kept in memory. A chunk coordinate is either unregistered
//! (reads are air, writes are dropped) or registered (chunk populated, mesh
//! current). Chunks are never evicted.
//!
//! ## Consistency
//!
//! Every call that changes voxels rebuilds the affected chunk meshes before it
//! returns, so no chunk is ever left dirty between calls.
//!
//! ## Performance Considerations
//!
//! - Chunk lookup is O(1) using a hash map
//! - `set_voxel` remeshes the whole chunk, O(S³) per call
//! - `set_voxels` coalesces a burst of edits into one remesh per touched chunk

use std::collections::{hash_map::Entry, HashMap, HashSet};

use cgmath::{Point3, Vector3};
use log::{debug, info, trace, warn};
use web_time::Instant;

use super::{
    block::{is_solid, VoxelTypeCode, AIR},
    chunk::Chunk,
    coords::{chunk_origin, VoxelAddress},
    raycast::{raycast, RayHit},
    terrain::TerrainGenerator,
};
use crate::{
    config::{WorldConfig, MAX_CHUNK_SIZE},
    error::ConfigError,
};

/// A single voxel write in world coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VoxelEdit {
    /// World coordinate to write
    pub position: Point3<i32>,
    /// Code to store
    pub code: VoxelTypeCode,
}

impl VoxelEdit {
    /// Creates an edit writing `code` at `position`.
    pub fn new(position: Point3<i32>, code: VoxelTypeCode) -> Self {
        VoxelEdit { position, code }
    }
}

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, each a cube of
/// `chunk_size`³ voxels.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_arena::{config::WorldConfig, engine_state::voxels::world::VoxelWorld};
///
/// let mut world = VoxelWorld::new(&WorldConfig::default()).unwrap();
/// assert_eq!(world.get_voxel(Point3::new(0, 0, 0)), 0);
///
/// world.ensure_chunk(Point3::new(0, 0, 0));
/// world.set_voxel(Point3::new(3, 15, 3), 3);
/// assert_eq!(world.get_voxel(Point3::new(3, 15, 3)), 3);
/// ```
#[derive(Debug)]
pub struct VoxelWorld {
    /// Side length of every chunk in this world.
    chunk_size: usize,
    /// Terrain pass run on every new chunk.
    generator: TerrainGenerator,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<Point3<i32>, Chunk>,
}

impl VoxelWorld {
    /// Creates a new, empty world from a config.
    ///
    /// # Errors
    /// Returns the validation error if the config is invalid.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_generator(
            config.chunk_size,
            TerrainGenerator::new(config.terrain.clone()),
        ))
    }

    /// Creates a new, empty world with an explicit terrain generator.
    ///
    /// `chunk_size` is clamped to `1..=MAX_CHUNK_SIZE`.
    pub fn with_generator(chunk_size: usize, generator: TerrainGenerator) -> Self {
        let clamped = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        if clamped != chunk_size {
            warn!("Chunk size {} out of range, using {}", chunk_size, clamped);
        }
        VoxelWorld {
            chunk_size: clamped,
            generator,
            chunks: HashMap::new(),
        }
    }

    /// Side length of every chunk in this world.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The terrain generator used for new chunks.
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// Resolves a world voxel coordinate to its chunk and local offset.
    pub fn address(&self, world: Point3<i32>) -> VoxelAddress {
        VoxelAddress::from_world(world, self.chunk_size)
    }

    /// Makes sure a chunk exists at the specified chunk coordinates.
    ///
    /// A missing chunk is created, filled by the terrain generator, meshed and
    /// registered. An existing chunk is returned untouched.
    ///
    /// # Returns
    /// `None` if no world voxel lies in that chunk; nothing is registered.
    ///
    /// # Performance
    ///
    /// Generation and meshing are both O(S³) and run synchronously.
    pub fn ensure_chunk(&mut self, position: Point3<i32>) -> Option<&Chunk> {
        if !self.is_addressable(position) {
            return None;
        }
        match self.chunks.entry(position) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => {
                let start = Instant::now();
                let mut chunk = Chunk::new(position, self.chunk_size);
                self.generator.generate_chunk(&mut chunk);
                chunk.rebuild_mesh();
                debug!(
                    "Registered chunk {:?} ({} solid) in {:?}",
                    position,
                    chunk.solid_count(),
                    start.elapsed()
                );
                Some(entry.insert(chunk))
            }
        }
    }

    /// Runs the terrain pass for a chunk and rebuilds its mesh.
    ///
    /// An unregistered chunk is registered. A registered chunk has its voxels
    /// reset to the generated terrain, discarding edits; its mesh handle is kept
    /// so the render layer sees the new geometry in place.
    ///
    /// # Returns
    /// `None` if no world voxel lies in that chunk; nothing is registered.
    pub fn generate_chunk(&mut self, position: Point3<i32>) -> Option<&Chunk> {
        if !self.is_addressable(position) {
            return None;
        }
        let size = self.chunk_size;
        let generator = &self.generator;
        let chunk = self
            .chunks
            .entry(position)
            .or_insert_with(|| Chunk::new(position, size));
        generator.generate_chunk(chunk);
        chunk.rebuild_mesh();
        debug!("Generated chunk {:?} ({} solid)", position, chunk.solid_count());
        Some(chunk)
    }

    /// Whether any world voxel resolves to the chunk at `position`.
    fn is_addressable(&self, position: Point3<i32>) -> bool {
        let addressable = chunk_origin(position, self.chunk_size).is_some();
        if !addressable {
            warn!("Chunk {:?} lies outside the world, not registering it", position);
        }
        addressable
    }

    /// Ensures every chunk in the inclusive box `min..=max` of chunk coordinates.
    ///
    /// # Returns
    /// The number of chunks that were newly created.
    pub fn ensure_region(&mut self, min: Point3<i32>, max: Point3<i32>) -> usize {
        let start = Instant::now();
        let before = self.chunks.len();

        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.ensure_chunk(Point3::new(x, y, z));
                }
            }
        }

        let created = self.chunks.len() - before;
        info!(
            "Ensured region {:?}..={:?}: {} new chunks in {:?}",
            min,
            max,
            created,
            start.elapsed()
        );
        created
    }

    /// Reads the voxel at a world coordinate.
    ///
    /// # Returns
    /// The stored code, or air if the containing chunk is not registered.
    pub fn get_voxel(&self, world: Point3<i32>) -> VoxelTypeCode {
        let address = self.address(world);
        match self.chunks.get(&address.chunk) {
            Some(chunk) => chunk.get(address.local.x, address.local.y, address.local.z),
            None => AIR,
        }
    }

    /// Writes the voxel at a world coordinate and rebuilds that chunk's mesh.
    ///
    /// Writes into unregistered chunks are dropped; they never create chunks.
    ///
    /// # Returns
    /// `true` if the containing chunk is registered and the write was applied.
    pub fn set_voxel(&mut self, world: Point3<i32>, code: VoxelTypeCode) -> bool {
        let address = self.address(world);
        let Some(chunk) = self.chunks.get_mut(&address.chunk) else {
            trace!("Dropping write at {:?}: chunk {:?} not registered", world, address.chunk);
            return false;
        };

        chunk.set(address.local.x, address.local.y, address.local.z, code);
        chunk.rebuild_mesh();
        trace!("Set {:?} to {}", world, code);
        true
    }

    /// Applies a batch of writes, rebuilding each touched chunk's mesh once.
    ///
    /// Writes into unregistered chunks are dropped. Later writes to the same
    /// voxel win.
    ///
    /// # Returns
    /// The number of voxels whose code changed.
    pub fn set_voxels<I>(&mut self, edits: I) -> usize
    where
        I: IntoIterator<Item = VoxelEdit>,
    {
        let mut touched = HashSet::new();
        let mut changed = 0;

        for edit in edits {
            let address = self.address(edit.position);
            let Some(chunk) = self.chunks.get_mut(&address.chunk) else {
                continue;
            };
            if chunk.set(address.local.x, address.local.y, address.local.z, edit.code) {
                changed += 1;
                touched.insert(address.chunk);
            }
        }

        for position in &touched {
            if let Some(chunk) = self.chunks.get_mut(position) {
                chunk.rebuild_mesh();
            }
        }

        if changed > 0 {
            debug!("Batch edit changed {} voxels in {} chunks", changed, touched.len());
        }
        changed
    }

    /// Clears every voxel within `radius` of `center` (an explosion crater).
    ///
    /// # Returns
    /// The number of solid voxels removed.
    pub fn carve_sphere(&mut self, center: Point3<i32>, radius: i32) -> usize {
        self.set_voxels(sphere_edits(center, radius, AIR))
    }

    /// World y of the highest solid voxel in the column at `(wx, wz)`.
    ///
    /// Only registered chunks are considered.
    ///
    /// # Returns
    /// `None` if no registered chunk holds a solid voxel in that column.
    pub fn surface_height(&self, wx: i32, wz: i32) -> Option<i32> {
        let address = self.address(Point3::new(wx, 0, wz));
        let mut column: Vec<&Chunk> = self
            .chunks
            .values()
            .filter(|chunk| chunk.position.x == address.chunk.x && chunk.position.z == address.chunk.z)
            .collect();
        column.sort_by(|a, b| b.position.y.cmp(&a.position.y));

        let size = self.chunk_size as i32;
        column.into_iter().find_map(|chunk| {
            (0..size)
                .rev()
                .find(|&y| is_solid(chunk.get(address.local.x, y, address.local.z)))
                .map(|y| chunk.origin().y.saturating_add(y))
        })
    }

    /// Casts a ray through the world and returns the first solid voxel hit.
    pub fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RayHit> {
        raycast(origin, direction, max_distance, |position| self.get_voxel(position))
    }

    /// Retrieves the chunk at the specified chunk coordinates, if registered.
    pub fn chunk(&self, position: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Whether a chunk is registered at the specified chunk coordinates.
    pub fn is_registered(&self, position: Point3<i32>) -> bool {
        self.chunks.contains_key(&position)
    }

    /// Iterates over every registered chunk in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Number of registered chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Sum of the triangle counts of every chunk mesh.
    pub fn total_triangle_count(&self) -> usize {
        self.chunks
            .values()
            .map(|chunk| chunk.mesh().get().triangle_count())
            .sum()
    }
}

/// Writes of `code` to every voxel within `radius` of `center`.
///
/// Positions that would overflow the world coordinate range are skipped.
pub fn sphere_edits(center: Point3<i32>, radius: i32, code: VoxelTypeCode) -> Vec<VoxelEdit> {
    let mut edits = Vec::new();
    if radius < 0 {
        return edits;
    }
    let radius_squared = radius as i64 * radius as i64;

    for dz in -radius..=radius {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let distance_squared = (dx as i64).pow(2) + (dy as i64).pow(2) + (dz as i64).pow(2);
                if distance_squared > radius_squared {
                    continue;
                }
                if let Some(position) = offset(center, Vector3::new(dx, dy, dz)) {
                    edits.push(VoxelEdit::new(position, code));
                }
            }
        }
    }

    edits
}

/// `point + delta`, or `None` if any axis overflows.
fn offset(point: Point3<i32>, delta: Vector3<i32>) -> Option<Point3<i32>> {
    Some(Point3::new(
        point.x.checked_add(delta.x)?,
        point.y.checked_add(delta.y)?,
        point.z.checked_add(delta.z)?,
    ))
}
