//! File I/O operations for queen placements

use super::Placement;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a placement from a text file
/// Format: a single line of comma-separated column indices, one per row
pub fn load_placement_from_file<P: AsRef<Path>>(path: P) -> Result<Placement> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read placement file: {}", path.as_ref().display()))?;

    parse_placement_from_string(&content)
        .with_context(|| format!("Failed to parse placement from file: {}", path.as_ref().display()))
}

/// Parse a placement from a string representation
pub fn parse_placement_from_string(content: &str) -> Result<Placement> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Placement file is empty");
    }

    let mut columns = Vec::new();
    for (idx, entry) in trimmed.split(',').enumerate() {
        let entry = entry.trim();
        let col: usize = entry.parse()
            .with_context(|| format!("Invalid column '{}' at row {}. Only non-negative integers are allowed", entry, idx))?;
        columns.push(col);
    }

    Placement::from_columns(columns)
}

/// Save a placement to a text file
pub fn save_placement_to_file<P: AsRef<Path>>(placement: &Placement, path: P) -> Result<()> {
    let content = placement_to_string(placement);

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write placement to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a placement to its string representation
pub fn placement_to_string(placement: &Placement) -> String {
    let entries: Vec<String> = placement
        .columns
        .iter()
        .map(|&col| col.to_string())
        .collect();

    let mut result = entries.join(",");
    result.push('\n');
    result
}

/// Create example placement files for testing the validator
pub fn create_example_placements<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Classic 8-queens solution
    std::fs::write(dir.join("classic_8.txt"), "0,4,7,5,2,6,1,3\n")
        .context("Failed to write classic_8.txt")?;

    // Smallest non-trivial board
    std::fs::write(dir.join("four.txt"), "1,3,0,2\n")
        .context("Failed to write four.txt")?;

    // Deliberately conflicting placement, useful for exercising validation
    std::fs::write(dir.join("conflicting_4.txt"), "0,1,3,2\n")
        .context("Failed to write conflicting_4.txt")?;

    Ok(())
}
