//! # Voxel Arena Entry Point
//!
//! Calls into the library's `run()` function, which builds the starting world
//! and applies one frame of edits.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [world.json]
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match voxel_arena::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("voxel-arena: {err}");
            ExitCode::FAILURE
        }
    }
}
