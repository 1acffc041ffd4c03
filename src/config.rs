//! # Configuration
//!
//! Construction-time parameters for a voxel world: the chunk side length, the
//! size of the region generated at startup and the terrain noise settings.
//!
//! Configs are plain `serde` structs. Every field has a default, so a JSON file
//! only needs the keys it wants to change:
//!
//! ```
//! use voxel_arena::config::WorldConfig;
//!
//! let config = WorldConfig::from_json_str(r#"{ "chunk_size": 8, "terrain": { "seed": 7 } }"#).unwrap();
//! assert_eq!(config.chunk_size, 8);
//! assert_eq!(config.terrain.seed, 7);
//! assert_eq!(config.terrain.octaves, 3);
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    engine_state::voxels::block::{block_type::VoxelType, descriptor, VoxelTypeCode},
    error::ConfigError,
};

/// Largest accepted chunk side length.
pub const MAX_CHUNK_SIZE: usize = 256;

/// Largest accepted `initial_radius`, in chunks.
pub const MAX_INITIAL_RADIUS: i32 = 64;

/// Largest number of chunk layers `initial_vertical_range` may span.
pub const MAX_INITIAL_LAYERS: i64 = 64;

/// Parameters for a [`VoxelWorld`](crate::engine_state::voxels::world::VoxelWorld)
/// and the region generated around the spawn point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of every chunk, in voxels. Fixed for the world's lifetime.
    pub chunk_size: usize,
    /// Chunks from `-initial_radius..=initial_radius` on X and Z are generated at startup.
    pub initial_radius: i32,
    /// Inclusive range of chunk Y coordinates generated at startup.
    pub initial_vertical_range: (i32, i32),
    /// Height-map parameters.
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_size: 16,
            initial_radius: 2,
            initial_vertical_range: (-1, 1),
            terrain: TerrainConfig::default(),
        }
    }
}

/// Noise and layering parameters consumed by terrain generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed of the height noise.
    pub seed: u32,
    /// World units to noise units. Smaller values give broader hills.
    pub frequency: f64,
    /// Number of noise octaves summed into the height.
    pub octaves: u32,
    /// Height of the terrain where the noise is zero.
    pub base_height: f64,
    /// Largest distance the surface moves away from `base_height`.
    pub amplitude: f64,
    /// Thickness of the surface layer.
    pub surface_depth: i32,
    /// Thickness of the layer between the surface and the deep layer.
    pub subsurface_depth: i32,
    /// Columns whose surface lies below this height use `shore_type` on top.
    pub sand_level: i32,
    /// Code of the surface layer.
    pub surface_type: VoxelTypeCode,
    /// Code of the layer under the surface.
    pub subsurface_type: VoxelTypeCode,
    /// Code of everything deeper.
    pub deep_type: VoxelTypeCode,
    /// Code of the surface layer in low-lying columns.
    pub shore_type: VoxelTypeCode,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: 0,
            frequency: 0.03,
            octaves: 3,
            base_height: 8.0,
            amplitude: 10.0,
            surface_depth: 1,
            subsurface_depth: 3,
            sand_level: 2,
            surface_type: VoxelType::Grass.code(),
            subsurface_type: VoxelType::Dirt.code(),
            deep_type: VoxelType::Stone.code(),
            shore_type: VoxelType::Sand.code(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded world config from {}", path.display());
        Ok(config)
    }

    /// Checks every field that would otherwise make world generation misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize {
                size: self.chunk_size,
                max: MAX_CHUNK_SIZE,
            });
        }
        if !(0..=MAX_INITIAL_RADIUS).contains(&self.initial_radius) {
            return Err(ConfigError::InvalidInitialRadius {
                radius: self.initial_radius,
                max: MAX_INITIAL_RADIUS,
            });
        }
        let (min, max) = self.initial_vertical_range;
        let layers = max as i64 - min as i64 + 1;
        if !(1..=MAX_INITIAL_LAYERS).contains(&layers) {
            return Err(ConfigError::InvalidVerticalRange { min, max });
        }
        self.terrain.validate()
    }
}

impl TerrainConfig {
    /// Checks the noise parameters and that every layer is a known solid material.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        if self.octaves == 0 {
            return Err(ConfigError::InvalidOctaves);
        }

        for (layer, code) in [
            ("surface_type", self.surface_type),
            ("subsurface_type", self.subsurface_type),
            ("deep_type", self.deep_type),
            ("shore_type", self.shore_type),
        ] {
            if descriptor(code).is_none() {
                return Err(ConfigError::UnknownVoxelType { layer, code });
            }
        }

        Ok(())
    }
}
