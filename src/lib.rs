#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Arena
//!
//! Chunked voxel storage and mesh generation for a destructible-terrain
//! arena game.
//!
//! The world is split into cubic chunks of voxel type codes. Each chunk owns a
//! face-culled triangle mesh that is rebuilt whenever its voxels change, so the
//! geometry handed to the renderer always matches the data.
//!
//! ## Key Modules
//!
//! * `config` - World and terrain parameters, loadable from JSON
//! * `error` - The error type for config loading and validation
//! * `engine_state` - The frame driver, voxel storage and meshing
//!
//! ## Architecture
//!
//! * `engine_state::voxels` holds the data side: voxel types, chunks, the
//!   sparse world registry, coordinate math, terrain and raycasting
//! * `engine_state::rendering` holds the geometry side: culled meshing,
//!   shared mesh handles and the interleaved vertex layout
//!
//! Everything runs on a single thread. Mesh handles are reference counted
//! and never cross threads.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = voxel_arena::run() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::env;

use cgmath::{Point3, Vector3};
use log::info;

use config::WorldConfig;
use engine_state::EngineState;
use error::ConfigError;

pub mod config;
pub mod engine_state;
pub mod error;

/// Radius of the crater blasted at spawn by [`run`].
const SPAWN_CRATER_RADIUS: i32 = 4;

/// Builds the world described by the config file given as the first
/// argument (or the defaults), blasts a crater at spawn and logs the result.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match env::args().nth(1) {
        Some(path) => WorldConfig::from_json_file(path)?,
        None => WorldConfig::default(),
    };

    let mut engine = EngineState::new(config)?;

    let spawn = engine.world().surface_height(0, 0).unwrap_or(0);
    let eye = Point3::new(0.5, spawn as f32 + 20.5, 0.5);
    if let Some(hit) = engine
        .world()
        .raycast(eye, Vector3::new(0.0, -1.0, 0.0), 64.0)
    {
        info!(
            "Spawn ray hit {:?} (type {}) at distance {:.1}",
            hit.voxel, hit.voxel_type, hit.distance
        );
        engine.queue_explosion(hit.voxel, SPAWN_CRATER_RADIUS);
    }

    let stats = engine.end_frame();
    info!(
        "Frame {}: {} commands, {} voxels changed, {} chunks, {} triangles",
        stats.frame,
        stats.commands,
        stats.voxels_changed,
        engine.world().chunk_count(),
        engine.world().total_triangle_count()
    );

    Ok(())
}
