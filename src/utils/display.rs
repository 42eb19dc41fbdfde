//! Display and output formatting utilities

use crate::board::Placement;
use crate::config::OutputFormat;
use crate::queens::Solution;
use anyhow::Result;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, show_board: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", solution.metadata.id));
        output.push_str(&format!("Board Size: {}\n", solution.size));
        output.push_str(&format!("Solve Time: {:.3}s\n", solution.solve_time.as_secs_f64()));
        output.push_str(&format!(
            "Search: {} nodes, {} backtracks\n",
            solution.metadata.nodes_expanded, solution.metadata.backtracks
        ));

        if solution.metadata.is_point_symmetric {
            output.push_str("Symmetry: maps onto itself under 180° rotation\n");
        }

        output.push_str(&format!("Columns: {:?}\n", solution.columns));
        output.push('\n');

        if show_board {
            output.push_str("Board:\n");
            output.push_str(&Self::format_board_with_coords(&solution.placement()));
        } else {
            output.push_str(&Self::format_board_compact(&solution.placement()));
        }

        output
    }

    /// Format a board in compact form
    pub fn format_board_compact(placement: &Placement) -> String {
        let mut output = String::new();
        for row in 0..placement.size {
            for col in 0..placement.size {
                output.push(if placement.column(row) == Some(col) { '♛' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with coordinate rulers
    pub fn format_board_with_coords(placement: &Placement) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..placement.size {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..placement.size {
            output.push_str(&format!("{:2} ", row));
            for col in 0..placement.size {
                output.push_str(if placement.column(row) == Some(col) { " ♛" } else { " ·" });
            }
            output.push('\n');
        }

        output
    }

    /// Save a solution to the output directory in the configured format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join(format!("{}.txt", solution.metadata.id));
                std::fs::write(filepath, Self::format_solution(solution, true))?;
            }
            OutputFormat::Json => {
                let filepath = output_dir.join(format!("{}.json", solution.metadata.id));
                solution.save_to_file(filepath)?;

                // Also save a summary file
                let summary_path = output_dir.join("summary.json");
                let summary_json = serde_json::to_string_pretty(&solution.summary())?;
                std::fs::write(summary_path, summary_json)?;
            }
            OutputFormat::Board => {
                let filepath = output_dir.join(format!("{}_board.txt", solution.metadata.id));
                std::fs::write(filepath, Self::format_board_with_coords(&solution.placement()))?;
            }
        }

        Ok(())
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
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
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
    use crate::search::SearchStatistics;
    use std::time::Duration;

    fn sample_solution() -> Solution {
        Solution::new(
            vec![1, 3, 0, 2],
            Duration::from_millis(1),
            &SearchStatistics::default(),
        )
    }

    #[test]
    fn test_compact_board_formatting() {
        let placement = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();
        let compact = SolutionFormatter::format_board_compact(&placement);

        assert_eq!(compact.lines().count(), 4);
        assert_eq!(compact.matches('♛').count(), 4);
        assert!(compact.contains('·'));
    }

    #[test]
    fn test_board_with_coords() {
        let placement = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();
        let board = SolutionFormatter::format_board_with_coords(&placement);

        assert!(board.contains(" 0 1 2 3"));
        assert!(board.contains('♛'));
    }

    #[test]
    fn test_solution_formatting() {
        let formatted = SolutionFormatter::format_solution(&sample_solution(), false);

        assert!(formatted.contains("Board Size: 4"));
        assert!(formatted.contains("[1, 3, 0, 2]"));
        assert!(formatted.contains("180°")); // the 4-queens solution is symmetric
    }

    #[test]
    fn test_save_solution_formats() {
        let temp_dir = tempfile::tempdir().unwrap();
        let solution = sample_solution();

        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Board] {
            SolutionFormatter::save_solution(&solution, temp_dir.path(), &format).unwrap();
        }

        let id = &solution.metadata.id;
        assert!(temp_dir.path().join(format!("{}.txt", id)).exists());
        assert!(temp_dir.path().join(format!("{}.json", id)).exists());
        assert!(temp_dir.path().join("summary.json").exists());
        assert!(temp_dir.path().join(format!("{}_board.txt", id)).exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
