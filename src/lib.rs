//! Toroidal Game of Life terminal simulator
//!
//! This library simulates Conway's Game of Life on a fixed-size square grid
//! whose edges wrap around, rendering successive generations as framed text
//! boards.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, LifeRules, StartingPattern};
pub use simulation::Simulation;

use anyhow::Result;

/// Seed a board from the given settings and run one rendered batch of
/// generations to stdout
pub fn run_simulation(settings: Settings) -> Result<()> {
    let mut simulation = Simulation::new(settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    simulation.render_initial(&mut out)?;
    simulation.run_batch(&mut out)?;

    Ok(())
}
