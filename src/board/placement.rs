//! Placement representation and utilities for queens on a board

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel marking a row that holds no queen yet
pub const UNPLACED: i32 = -1;

/// Represents queen positions on an N×N board, one entry per row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub size: usize,
    pub columns: Vec<i32>,
}

impl Placement {
    /// Create a new empty placement (all rows unplaced)
    pub fn new(size: usize) -> Self {
        Self {
            size,
            columns: vec![UNPLACED; size],
        }
    }

    /// Create a placement from a full column assignment
    pub fn from_columns(columns: Vec<usize>) -> Result<Self> {
        if columns.is_empty() {
            anyhow::bail!("Placement cannot be empty");
        }

        let size = columns.len();
        for (row, &col) in columns.iter().enumerate() {
            if col >= size {
                anyhow::bail!("Row {} has column {}, expected a column below {}", row, col, size);
            }
        }

        Ok(Self {
            size,
            columns: columns.into_iter().map(|col| col as i32).collect(),
        })
    }

    /// Get the committed column for a row, if any
    pub fn column(&self, row: usize) -> Option<usize> {
        match self.columns.get(row) {
            Some(&col) if col >= 0 => Some(col as usize),
            _ => None,
        }
    }

    /// Commit a queen at (row, col). Indices outside the board are a
    /// programming defect and panic.
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(col < self.size, "column {} outside board of size {}", col, self.size);
        self.columns[row] = col as i32;
    }

    /// Remove the queen from a row (backtrack)
    pub fn unplace(&mut self, row: usize) {
        self.columns[row] = UNPLACED;
    }

    /// Reset every row to unplaced
    pub fn clear(&mut self) {
        self.columns.fill(UNPLACED);
    }

    /// Get all committed (row, column) pairs
    pub fn committed(&self) -> Vec<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(row, &col)| (col >= 0).then(|| (row, col as usize)))
            .collect()
    }

    /// Count rows holding a queen
    pub fn committed_count(&self) -> usize {
        self.columns.iter().filter(|&&col| col >= 0).count()
    }

    /// Check if every row holds a queen
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(|&col| col >= 0)
    }

    /// Check if no row holds a queen
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|&col| col < 0)
    }

    /// Extract the full column assignment, or None while incomplete
    pub fn as_columns(&self) -> Option<Vec<usize>> {
        self.is_complete()
            .then(|| self.columns.iter().map(|&col| col as usize).collect())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = if self.column(row) == Some(col) { 'Q' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_creation() {
        let placement = Placement::new(4);
        assert_eq!(placement.size, 4);
        assert_eq!(placement.columns.len(), 4);
        assert!(placement.is_empty());
        assert!(!placement.is_complete());
    }

    #[test]
    fn test_place_and_unplace() {
        let mut placement = Placement::new(4);

        placement.place(0, 2);
        assert_eq!(placement.column(0), Some(2));
        assert_eq!(placement.committed_count(), 1);

        placement.unplace(0);
        assert_eq!(placement.column(0), None);
        assert!(placement.is_empty());
    }

    #[test]
    fn test_from_columns() {
        let placement = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(placement.size, 4);
        assert!(placement.is_complete());
        assert_eq!(placement.column(1), Some(3));
        assert_eq!(placement.as_columns(), Some(vec![1, 3, 0, 2]));
    }

    #[test]
    fn test_from_columns_rejects_bad_input() {
        // Column index out of range for the board
        assert!(Placement::from_columns(vec![0, 4, 1, 2]).is_err());

        // Empty assignment
        assert!(Placement::from_columns(vec![]).is_err());
    }

    #[test]
    fn test_incomplete_placement_has_no_columns() {
        let mut placement = Placement::new(3);
        placement.place(0, 1);
        assert_eq!(placement.as_columns(), None);
        assert_eq!(placement.committed(), vec![(0, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut placement = Placement::from_columns(vec![0, 2]).unwrap();
        placement.clear();
        assert!(placement.is_empty());
        assert_eq!(placement.size, 2);
    }

    #[test]
    fn test_display_shows_queens() {
        let placement = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();
        let rendered = placement.to_string();
        assert_eq!(rendered.matches('Q').count(), 4);
        assert!(rendered.contains('.'));
    }
}
