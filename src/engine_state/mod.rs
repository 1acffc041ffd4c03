//! # Engine State Module
//!
//! The per-frame driver around the voxel world.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world, builds the starting region and applies queued edits
//! * `rendering` - Culled meshing, mesh handles and the vertex format
//! * `voxels` - Voxel data, chunks, addressing and terrain generation
//!
//! ## Frame Model
//!
//! Gameplay systems queue edits during a frame with [`EngineState::queue_edit`]
//! and [`EngineState::queue_explosion`]. [`EngineState::end_frame`] applies the
//! whole queue as one batch, so each touched chunk is remeshed once per frame
//! no matter how many of its voxels changed. When `end_frame` returns every
//! chunk mesh matches its voxels and the scene can render.

use cgmath::Point3;
use log::{debug, info};
use web_time::Instant;

use voxels::{
    block::VoxelTypeCode,
    world::{sphere_edits, VoxelEdit, VoxelWorld},
};

use crate::{config::WorldConfig, error::ConfigError};

pub mod rendering;
pub mod voxels;

/// A change to the world requested during a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WorldCommand {
    /// Write one voxel.
    SetVoxel(VoxelEdit),
    /// Clear every voxel within `radius` of `center`.
    Explode {
        /// Crater center in world coordinates
        center: Point3<i32>,
        /// Crater radius in voxels
        radius: i32,
    },
}

/// Summary of the edits applied by one [`EngineState::end_frame`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame that just ended
    pub frame: u64,
    /// Number of commands drained from the queue
    pub commands: usize,
    /// Number of voxels whose code changed
    pub voxels_changed: usize,
}

/// The main state container for the voxel engine
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_arena::{config::WorldConfig, engine_state::EngineState};
///
/// let config = WorldConfig { initial_radius: 0, initial_vertical_range: (0, 0), ..WorldConfig::default() };
/// let mut engine = EngineState::new(config).unwrap();
///
/// engine.queue_explosion(Point3::new(8, 8, 8), 3);
/// let stats = engine.end_frame();
/// assert_eq!(stats.commands, 1);
/// ```
#[derive(Debug)]
pub struct EngineState {
    /// The voxel world containing all chunk data
    world: VoxelWorld,
    /// The configuration the world was built from
    config: WorldConfig,
    /// Commands queued since the last `end_frame`
    pending: Vec<WorldCommand>,
    /// Number of frames ended so far
    frame: u64,
}

impl EngineState {
    /// Creates the world and generates the starting region around the origin.
    ///
    /// # Errors
    /// Returns the validation error if the config is invalid.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let start = Instant::now();
        let mut world = VoxelWorld::new(&config)?;

        let radius = config.initial_radius;
        let (min_y, max_y) = config.initial_vertical_range;
        world.ensure_region(
            Point3::new(-radius, min_y, -radius),
            Point3::new(radius, max_y, radius),
        );

        info!(
            "World ready: {} chunks of {}³, {} triangles, built in {:?}",
            world.chunk_count(),
            world.chunk_size(),
            world.total_triangle_count(),
            start.elapsed()
        );

        Ok(EngineState {
            world,
            config,
            pending: Vec::new(),
            frame: 0,
        })
    }

    /// Read access to the world for queries and rendering.
    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    /// Direct world access. Edits made through it remesh immediately.
    pub fn world_mut(&mut self) -> &mut VoxelWorld {
        &mut self.world
    }

    /// The configuration the world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of frames ended so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of commands waiting for the end of the frame.
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Queues a single voxel write for the end of the frame.
    pub fn queue_edit(&mut self, position: Point3<i32>, code: VoxelTypeCode) {
        self.pending
            .push(WorldCommand::SetVoxel(VoxelEdit::new(position, code)));
    }

    /// Queues a crater for the end of the frame.
    pub fn queue_explosion(&mut self, center: Point3<i32>, radius: i32) {
        self.pending.push(WorldCommand::Explode { center, radius });
    }

    /// Applies every queued command in order and remeshes each touched chunk once.
    pub fn end_frame(&mut self) -> FrameStats {
        let commands = std::mem::take(&mut self.pending);
        let command_count = commands.len();

        let mut edits = Vec::new();
        for command in commands {
            match command {
                WorldCommand::SetVoxel(edit) => edits.push(edit),
                WorldCommand::Explode { center, radius } => {
                    edits.extend(sphere_edits(center, radius, voxels::block::AIR))
                }
            }
        }

        let voxels_changed = if edits.is_empty() {
            0
        } else {
            self.world.set_voxels(edits)
        };

        let stats = FrameStats {
            frame: self.frame,
            commands: command_count,
            voxels_changed,
        };
        self.frame += 1;

        if stats.commands > 0 {
            debug!("{:?}", stats);
        }
        stats
    }
}
