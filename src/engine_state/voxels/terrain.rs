//! # Terrain Module
//!
//! Deterministic height-map terrain. Each `(x, z)` column gets a surface height
//! from seeded 2D Perlin noise, and every cell in the column is classified by
//! how far below that surface it lies:
//!
//! | depth below surface                         | voxel                           |
//! |---------------------------------------------|---------------------------------|
//! | above the surface                           | air                             |
//! | `< surface_depth`                           | surface (shore below sand level)|
//! | `< surface_depth + subsurface_depth`        | subsurface                      |
//! | deeper                                      | deep                            |
//!
//! The pass depends only on the chunk coordinate and the config, so
//! regenerating a chunk always yields the same voxels.

use cgmath::Point3;
use log::debug;
use noise::{NoiseFn, Perlin};
use web_time::Instant;

use super::{
    block::{VoxelTypeCode, AIR},
    chunk::{chunk_creation::ChunkCreationIterator, Chunk},
};
use crate::config::TerrainConfig;

/// Generates terrain voxels for chunks.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    perlin: Perlin,
}

impl TerrainGenerator {
    /// Creates a generator from validated terrain parameters.
    pub fn new(config: TerrainConfig) -> Self {
        TerrainGenerator {
            perlin: Perlin::new(config.seed),
            config,
        }
    }

    /// The parameters this generator was built with.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Continuous terrain height of the column at world `(wx, wz)`.
    ///
    /// Sums `octaves` layers of Perlin noise, each at double the frequency and
    /// half the weight of the previous one, normalized back to `-1..=1` before
    /// scaling by the amplitude.
    pub fn column_height(&self, wx: i32, wz: i32) -> f64 {
        let mut frequency = self.config.frequency;
        let mut weight = 1.0;
        let mut total = 0.0;
        let mut weight_sum = 0.0;

        for _ in 0..self.config.octaves {
            total += weight * self.perlin.get([wx as f64 * frequency, wz as f64 * frequency]);
            weight_sum += weight;
            frequency *= 2.0;
            weight *= 0.5;
        }

        let normalized = if weight_sum > 0.0 { total / weight_sum } else { 0.0 };
        self.config.base_height + self.config.amplitude * normalized
    }

    /// World y of the topmost solid voxel in the column at `(wx, wz)`.
    pub fn surface_level(&self, wx: i32, wz: i32) -> i32 {
        self.column_height(wx, wz).floor() as i32
    }

    /// Classifies the cell at world height `wy` in a column whose top solid voxel is at `surface`.
    pub fn classify(&self, surface: i32, wy: i32) -> VoxelTypeCode {
        if wy > surface {
            return AIR;
        }

        let depth = surface as i64 - wy as i64;
        let surface_depth = self.config.surface_depth.max(0) as i64;
        let subsurface_depth = self.config.subsurface_depth.max(0) as i64;

        if depth < surface_depth {
            if surface < self.config.sand_level {
                self.config.shore_type
            } else {
                self.config.surface_type
            }
        } else if depth < surface_depth + subsurface_depth {
            self.config.subsurface_type
        } else {
            self.config.deep_type
        }
    }

    /// Fills `chunk` with the terrain for its position, replacing any existing voxels.
    ///
    /// The mesh is not rebuilt; the chunk is left dirty.
    pub fn generate_chunk(&self, chunk: &mut Chunk) {
        let start = Instant::now();
        let size = chunk.size();
        let origin = chunk.origin();
        let surfaces = self.column_surfaces(origin, size);

        let mut cci = ChunkCreationIterator::new(size);
        while let Some((x, y, z)) = cci.next_position() {
            let surface = surfaces[x + z * size];
            cci.push_block_type(self.classify(surface, origin.y.saturating_add(y as i32)));
        }

        let solid = cci.solid_count();
        cci.fill_chunk(chunk);

        debug!(
            "Generated chunk {:?}: {} solid voxels in {:?}",
            chunk.position,
            solid,
            start.elapsed()
        );
    }

    /// Surface levels of every column in a chunk, indexed `x + z·S`.
    fn column_surfaces(&self, origin: Point3<i32>, size: usize) -> Vec<i32> {
        let mut surfaces = Vec::with_capacity(size * size);
        for z in 0..size as i32 {
            for x in 0..size as i32 {
                surfaces.push(self.surface_level(origin.x.saturating_add(x), origin.z.saturating_add(z)));
            }
        }
        surfaces
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        TerrainGenerator::new(TerrainConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::VoxelType;

    fn flat(base_height: f64) -> TerrainGenerator {
        TerrainGenerator::new(TerrainConfig {
            base_height,
            amplitude: 0.0,
            ..TerrainConfig::default()
        })
    }

    #[test]
    fn classification_layers() {
        let generator = flat(10.0);
        let surface = 10;
        assert_eq!(generator.classify(surface, 11), AIR);
        assert_eq!(generator.classify(surface, 10), VoxelType::Grass.code());
        assert_eq!(generator.classify(surface, 9), VoxelType::Dirt.code());
        assert_eq!(generator.classify(surface, 7), VoxelType::Dirt.code());
        assert_eq!(generator.classify(surface, 6), VoxelType::Stone.code());
        assert_eq!(generator.classify(surface, -1000), VoxelType::Stone.code());
    }

    #[test]
    fn low_columns_get_shore_surface() {
        let generator = flat(0.0);
        assert_eq!(generator.classify(0, 0), VoxelType::Sand.code());
        assert_eq!(generator.classify(0, -1), VoxelType::Dirt.code());
    }

    #[test]
    fn flat_terrain_fills_below_surface() {
        let generator = flat(5.5);
        let mut chunk = Chunk::new(Point3::new(0, 0, 0), 8);
        generator.generate_chunk(&mut chunk);

        for z in 0..8 {
            for x in 0..8 {
                for y in 0..8 {
                    let solid = chunk.get(x, y, z) != AIR;
                    assert_eq!(solid, y <= 5, "({}, {}, {})", x, y, z);
                }
                assert_eq!(chunk.get(x, 5, z), VoxelType::Grass.code());
            }
        }
        assert_eq!(chunk.solid_count(), 8 * 8 * 6);
        assert!(chunk.is_dirty());
    }

    #[test]
    fn chunks_far_above_or_below_are_uniform() {
        let generator = flat(0.0);
        let mut sky = Chunk::new(Point3::new(3, 4, -2), 4);
        generator.generate_chunk(&mut sky);
        assert!(sky.is_empty());

        let mut bedrock = Chunk::new(Point3::new(-1, -5, 7), 4);
        generator.generate_chunk(&mut bedrock);
        assert_eq!(bedrock.solid_count(), 64);
        assert!(bedrock.voxels().iter().all(|&c| c == VoxelType::Stone.code()));
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = TerrainGenerator::new(TerrainConfig {
            seed: 1234,
            ..TerrainConfig::default()
        });
        let mut a = Chunk::new(Point3::new(-1, 0, 2), 16);
        let mut b = Chunk::new(Point3::new(-1, 0, 2), 16);
        generator.generate_chunk(&mut a);
        TerrainGenerator::new(generator.config().clone()).generate_chunk(&mut b);
        assert_eq!(a.voxels(), b.voxels());
    }

    #[test]
    fn heights_stay_within_amplitude() {
        let generator = TerrainGenerator::default();
        let config = generator.config();
        for wx in (-200..200).step_by(7) {
            for wz in (-200..200).step_by(11) {
                let height = generator.column_height(wx, wz);
                // Perlin output may overshoot 1.0 slightly.
                assert!((height - config.base_height).abs() <= config.amplitude * 1.5);
            }
        }
    }
}
