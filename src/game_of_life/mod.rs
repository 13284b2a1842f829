//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use grid::Grid;
pub use io::{create_example_patterns, load_grid_from_file, save_grid_to_file};
pub use patterns::{random_grid, PatternError, StartingPattern};
pub use rules::LifeRules;
