//! Starting pattern catalog and board seeding

use super::io::parse_grid_from_string;
use super::Grid;
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Side length of the named catalog templates.
const TEMPLATE_SIZE: usize = 6;

const BEACON: &str = "\
000000
011000
011000
000110
000110
000000";

const BLINKER: &str = "\
000000
001000
001000
001000
000000
000000";

const TOAD: &str = "\
000000
001110
011100
000000
000000
000000";

const GLIDER: &str = "\
001000
101000
011000
000000
000000
000000";

/// Errors in starting-pattern selection
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Unknown pattern '{0}'. Options: beacon, blinker, toad, glider, random")]
    UnknownPattern(String),

    #[error("Pattern '{name}' is a {expected}x{expected} template and cannot seed a {actual}x{actual} board")]
    SizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// A starting condition for the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingPattern {
    Beacon,
    Blinker,
    Toad,
    Glider,
    Random,
}

impl StartingPattern {
    /// Parse a pattern selection as typed at the console
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name {
            "beacon" => Ok(Self::Beacon),
            "blinker" => Ok(Self::Blinker),
            "toad" => Ok(Self::Toad),
            "glider" => Ok(Self::Glider),
            "random" => Ok(Self::Random),
            other => Err(PatternError::UnknownPattern(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beacon => "beacon",
            Self::Blinker => "blinker",
            Self::Toad => "toad",
            Self::Glider => "glider",
            Self::Random => "random",
        }
    }

    /// Side length the named templates are defined at
    pub fn template_size() -> usize {
        TEMPLATE_SIZE
    }

    /// The '0'/'1' template for a named pattern, None for Random
    pub fn template(&self) -> Option<&'static str> {
        match self {
            Self::Beacon => Some(BEACON),
            Self::Blinker => Some(BLINKER),
            Self::Toad => Some(TOAD),
            Self::Glider => Some(GLIDER),
            Self::Random => None,
        }
    }

    /// Seed a board of the given size from this pattern.
    ///
    /// Named patterns only exist as fixed templates, so the requested size
    /// must match; `Random` seeds any size with fair per-cell booleans.
    pub fn seed_grid(&self, size: usize) -> Result<Grid> {
        match self.template() {
            Some(template) => {
                if size != TEMPLATE_SIZE {
                    return Err(PatternError::SizeMismatch {
                        name: self.name(),
                        expected: TEMPLATE_SIZE,
                        actual: size,
                    }
                    .into());
                }
                parse_grid_from_string(template)
                    .with_context(|| format!("Failed to parse '{}' template", self.name()))
            }
            None => Ok(random_grid(size)),
        }
    }
}

/// Generate a uniformly random grid
pub fn random_grid(size: usize) -> Grid {
    let mut rng = rand::rng();
    let mut grid = Grid::new(size);
    for cell in grid.cells.iter_mut() {
        *cell = rng.random();
    }
    grid
}
