//! Simulation driver: owns the board and paces batches of generations

use crate::config::Settings;
use crate::game_of_life::{Grid, LifeRules};
use crate::utils::BoardRenderer;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// A running Game of Life simulation.
///
/// The engine itself has no notion of time; all pacing between frames
/// happens here, in the driver.
pub struct Simulation {
    settings: Settings,
    grid: Grid,
    generation: usize,
}

impl Simulation {
    /// Create a simulation seeded from the configured starting pattern
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let grid = settings
            .simulation
            .pattern
            .seed_grid(settings.simulation.board_size)
            .context("Failed to seed the starting grid")?;

        Ok(Self {
            settings,
            grid,
            generation: 0,
        })
    }

    /// Create a simulation over a caller-supplied grid (e.g. loaded from a
    /// file). The grid is square by construction; its size takes precedence
    /// over the configured board size.
    pub fn with_grid(mut settings: Settings, grid: Grid) -> Result<Self> {
        settings.simulation.board_size = grid.size;

        Ok(Self {
            settings,
            grid,
            generation: 0,
        })
    }

    /// Current board state
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the starting state
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Advance the board one generation
    pub fn advance(&mut self) {
        LifeRules::step(&mut self.grid);
        self.generation += 1;
    }

    /// Render the starting state and hold it on screen briefly
    pub fn render_initial(&self, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", BoardRenderer::render_with_generation(&self.grid, self.generation))
            .context("Failed to write board frame")?;
        out.flush().context("Failed to flush output")?;

        Self::pause(self.settings.display.initial_pause_ms);
        Ok(())
    }

    /// Advance and render one batch of generations, pacing frames by the
    /// configured delay
    pub fn run_batch(&mut self, out: &mut impl Write) -> Result<()> {
        for _ in 0..self.settings.simulation.generations_per_batch {
            self.advance();

            write!(out, "{}", BoardRenderer::render_with_generation(&self.grid, self.generation))
                .context("Failed to write board frame")?;
            out.flush().context("Failed to flush output")?;

            Self::pause(self.settings.display.delay_ms);
        }

        Ok(())
    }

    fn pause(millis: u64) {
        if millis > 0 {
            std::thread::sleep(Duration::from_millis(millis));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::StartingPattern;

    fn fast_settings() -> Settings {
        let mut settings = Settings::default();
        settings.display.delay_ms = 0;
        settings.display.initial_pause_ms = 0;
        settings
    }

    #[test]
    fn test_new_seeds_configured_pattern() {
        let mut settings = fast_settings();
        settings.simulation.pattern = StartingPattern::Blinker;

        let simulation = Simulation::new(settings).unwrap();
        assert_eq!(simulation.generation(), 0);
        assert_eq!(simulation.grid().living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut settings = fast_settings();
        settings.simulation.board_size = 0;
        assert!(Simulation::new(settings).is_err());
    }

    #[test]
    fn test_advance_ticks_the_board() {
        let mut settings = fast_settings();
        settings.simulation.pattern = StartingPattern::Blinker;

        let mut simulation = Simulation::new(settings).unwrap();
        simulation.advance();

        assert_eq!(simulation.generation(), 1);
        assert_eq!(simulation.grid().living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_run_batch_advances_and_renders() {
        let mut settings = fast_settings();
        settings.simulation.pattern = StartingPattern::Blinker;
        settings.simulation.generations_per_batch = 4;

        let mut simulation = Simulation::new(settings).unwrap();
        let mut out = Vec::new();
        simulation.run_batch(&mut out).unwrap();

        assert_eq!(simulation.generation(), 4);

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Generation 1"));
        assert!(rendered.contains("Generation 4"));
        // Blinker period 2: back to the vertical triple.
        assert_eq!(simulation.grid().living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_with_grid_adopts_grid_size() {
        let grid = Grid::new(9);
        let simulation = Simulation::with_grid(fast_settings(), grid).unwrap();

        assert_eq!(simulation.grid().size, 9);
        assert_eq!(simulation.settings().simulation.board_size, 9);
    }
}
