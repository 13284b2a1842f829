//! Square board representation for Game of Life

use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square Game of Life board with toroidally-wrapped edges.
///
/// Cells are stored row-major in a flat vector; the board is always
/// `size` x `size` and never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty (all dead) grid
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let size = rows.len();

        // Square invariant: every row as long as there are rows.
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                anyhow::bail!(
                    "Row {} has length {}, expected {} (grid must be square)",
                    i,
                    row.len(),
                    size
                );
            }
        }

        let cells: Vec<bool> = rows.into_iter().flatten().collect();

        Ok(Self { size, cells })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.size || col >= self.size {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.size,
                self.size
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors for a cell among its 8 toroidal neighbors
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in (-1isize..=1).cartesian_product(-1isize..=1) {
            if dr == 0 && dc == 0 {
                continue; // Skip the cell itself
            }

            let r = self.wrap(row as isize + dr);
            let c = self.wrap(col as isize + dc);

            if self.cells[self.index(r, c)] {
                count += 1;
            }
        }

        count
    }

    /// Wrap a raw coordinate onto the board. Single-step wrap: neighbor
    /// offsets are only ever +/-1, so a branch suffices; this is not a
    /// general modulo.
    #[inline]
    fn wrap(&self, coord: isize) -> usize {
        if coord < 0 {
            self.size - 1
        } else if coord >= self.size as isize {
            0
        } else {
            coord as usize
        }
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = if self.get(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
