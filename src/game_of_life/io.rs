//! Text I/O for Game of Life grids
//!
//! Format: one line per row, '1' for live cells and '0' for dead cells.

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid text is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    // from_rows enforces the square invariant.
    Grid::from_rows(rows)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.size * (grid.size + 1));

    for row in 0..grid.size {
        for col in 0..grid.size {
            result.push(if grid.get(row, col) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Write the named catalog patterns as example grid files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    use super::StartingPattern;

    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in [
        StartingPattern::Beacon,
        StartingPattern::Blinker,
        StartingPattern::Toad,
        StartingPattern::Glider,
    ] {
        let grid = pattern.seed_grid(StartingPattern::template_size())?;
        let filename = format!("{}.txt", pattern.name());
        save_grid_to_file(&grid, dir.join(&filename))
            .with_context(|| format!("Failed to write {}", filename))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let content = "010\n101\n010\n";
        let grid = parse_grid_from_string(content).unwrap();

        assert_eq!(grid.size, 3);
        assert_eq!(grid.living_count(), 4);
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 2));
        assert!(grid.get(2, 1));
    }

    #[test]
    fn test_grid_to_string() {
        let rows = vec![
            vec![false, true, false],
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid_to_string(&grid), "010\n101\n010\n");
    }

    #[test]
    fn test_round_trip() {
        let original = "010\n101\n010\n";
        let grid = parse_grid_from_string(original).unwrap();

        assert_eq!(grid_to_string(&grid), original);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test_grid.txt");

        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, true, false],
        ];
        let original = Grid::from_rows(rows).unwrap();

        save_grid_to_file(&original, &file_path).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_grid_from_string("010\n1X1\n010\n").is_err());

        // Jagged rows
        assert!(parse_grid_from_string("010\n11\n010\n").is_err());

        // Rectangular (non-square) grid
        assert!(parse_grid_from_string("010\n101\n").is_err());

        // Empty content
        assert!(parse_grid_from_string("").is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["beacon", "blinker", "toad", "glider"] {
            let path = temp_dir.path().join(format!("{}.txt", name));
            assert!(path.exists());
        }

        let beacon = load_grid_from_file(temp_dir.path().join("beacon.txt")).unwrap();
        assert_eq!(beacon.size, 6);
        assert_eq!(beacon.living_count(), 8);
    }
}
