//! Board rendering and console output utilities

use crate::game_of_life::Grid;

const CORNER_TOP_LEFT: char = '╔';
const CORNER_TOP_RIGHT: char = '╗';
const CORNER_BOTTOM_LEFT: char = '╚';
const CORNER_BOTTOM_RIGHT: char = '╝';
const EDGE_HORIZONTAL: char = '═';
const EDGE_VERTICAL: char = '║';
const CELL_ALIVE: char = '█';
const CELL_DEAD: char = '░';

/// Renders a grid as a border-framed text board
pub struct BoardRenderer;

impl BoardRenderer {
    /// Render the grid inside a box-drawing frame, one glyph per cell
    pub fn render(grid: &Grid) -> String {
        // Frame is size+2 wide; rows are size+3 chars with the newline.
        let mut output = String::with_capacity((grid.size + 3) * (grid.size + 2));

        output.push(CORNER_TOP_LEFT);
        for _ in 0..grid.size {
            output.push(EDGE_HORIZONTAL);
        }
        output.push(CORNER_TOP_RIGHT);
        output.push('\n');

        for row in 0..grid.size {
            output.push(EDGE_VERTICAL);
            for col in 0..grid.size {
                output.push(if grid.get(row, col) {
                    CELL_ALIVE
                } else {
                    CELL_DEAD
                });
            }
            output.push(EDGE_VERTICAL);
            output.push('\n');
        }

        output.push(CORNER_BOTTOM_LEFT);
        for _ in 0..grid.size {
            output.push(EDGE_HORIZONTAL);
        }
        output.push(CORNER_BOTTOM_RIGHT);
        output.push('\n');

        output
    }

    /// Render the grid with a generation caption above the frame
    pub fn render_with_generation(grid: &Grid, generation: usize) -> String {
        format!(
            "Generation {} (living: {}):\n{}",
            generation,
            grid.living_count(),
            Self::render(grid)
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::StartingPattern;

    #[test]
    fn test_frame_shape() {
        let grid = Grid::new(4);
        let rendered = BoardRenderer::render(&grid);
        let lines: Vec<&str> = rendered.lines().collect();

        // 4 cell rows plus top and bottom borders.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "╔════╗");
        assert_eq!(lines[5], "╚════╝");
        for line in &lines[1..5] {
            assert_eq!(*line, "║░░░░║");
        }
    }

    #[test]
    fn test_live_and_dead_glyphs() {
        let grid = StartingPattern::Blinker.seed_grid(6).unwrap();
        let rendered = BoardRenderer::render(&grid);
        let lines: Vec<&str> = rendered.lines().collect();

        // Blinker lives at column 2 of rows 1-3; +1 for the left border.
        assert_eq!(lines[2], "║░░█░░░║");
        assert_eq!(lines[3], "║░░█░░░║");
        assert_eq!(lines[4], "║░░█░░░║");
        assert_eq!(lines[1], "║░░░░░░║");
    }

    #[test]
    fn test_generation_caption() {
        let grid = StartingPattern::Beacon.seed_grid(6).unwrap();
        let rendered = BoardRenderer::render_with_generation(&grid, 7);

        assert!(rendered.starts_with("Generation 7 (living: 8):\n"));
        assert!(rendered.contains('╔'));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
