//! Game of Life transition rules

use super::Grid;

/// Conway rule engine: B3/S23, fixed thresholds
pub struct LifeRules;

impl LifeRules {
    /// Compute the next generation into a fresh grid, reading only the
    /// current generation's state.
    pub fn next_generation(current: &Grid) -> Grid {
        let mut next = Grid::new(current.size);

        for row in 0..current.size {
            for col in 0..current.size {
                let neighbors = current.count_neighbors(row, col);
                let idx = next.index(row, col);
                next.cells[idx] = Self::should_be_alive(current.get(row, col), neighbors);
            }
        }

        next
    }

    /// Advance the grid one generation in place.
    ///
    /// The next generation is fully computed into a scratch buffer before
    /// the grid's own storage is overwritten, so no cell ever reads a
    /// partially-updated board. Holders of the same grid observe the new
    /// generation; dimensions are unchanged.
    pub fn step(grid: &mut Grid) {
        let next = Self::next_generation(grid);
        grid.cells.copy_from_slice(&next.cells);
    }

    /// Advance the grid several generations in place
    pub fn step_generations(grid: &mut Grid, generations: usize) {
        for _ in 0..generations {
            Self::step(grid);
        }
    }

    /// The transition rule as a pure predicate over one cell
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }
}
