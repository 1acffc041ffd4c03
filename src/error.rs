//! Error types.
//!
//! Voxel addressing never fails; the only fallible surface is loading and
//! validating configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine_state::voxels::block::VoxelTypeCode;

/// Errors raised while loading or validating a [`WorldConfig`](crate::config::WorldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for a world config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Chunks must have a side length between 1 and the maximum.
    #[error("chunk size {size} must be between 1 and {max}")]
    InvalidChunkSize {
        /// Requested side length
        size: usize,
        /// Largest accepted side length
        max: usize,
    },

    /// The startup region radius must be between 0 and the maximum.
    #[error("initial radius {radius} must be between 0 and {max}")]
    InvalidInitialRadius {
        /// Requested radius in chunks
        radius: i32,
        /// Largest accepted radius
        max: i32,
    },

    /// The startup vertical range is reversed or too tall.
    #[error("initial vertical range {min}..={max} is empty or too tall")]
    InvalidVerticalRange {
        /// Lowest chunk layer
        min: i32,
        /// Highest chunk layer
        max: i32,
    },

    /// The noise frequency must be finite and positive.
    #[error("terrain frequency {0} must be finite and positive")]
    InvalidFrequency(f64),

    /// Height noise needs at least one octave.
    #[error("terrain needs at least one octave")]
    InvalidOctaves,

    /// A terrain layer names air or a code with no descriptor.
    #[error("terrain layer `{layer}` uses unknown or non-solid voxel type {code}")]
    UnknownVoxelType {
        /// Which terrain layer was misconfigured
        layer: &'static str,
        /// The offending code
        code: VoxelTypeCode,
    },
}
