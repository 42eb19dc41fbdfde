//! Solution representation for solved boards

use crate::board::Placement;
use crate::search::SearchStatistics;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Represents a solved N-Queens board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Board size
    pub size: usize,
    /// Column of the queen in each row, top to bottom
    pub columns: Vec<usize>,
    /// Time taken to find this solution
    #[serde(skip)]
    pub solve_time: Duration,
    /// Metadata about the solution
    pub metadata: SolutionMetadata,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Stable identifier derived from the column assignment
    pub id: String,
    /// Queens committed during the search, including retracted ones
    pub nodes_expanded: u64,
    /// Commitments undone during the search
    pub backtracks: u64,
    /// Whether the placement maps onto itself under 180° rotation
    pub is_point_symmetric: bool,
}

impl Solution {
    /// Create a new solution from a complete column assignment
    pub fn new(columns: Vec<usize>, solve_time: Duration, statistics: &SearchStatistics) -> Self {
        let size = columns.len();
        let metadata = SolutionMetadata::analyze(&columns, statistics);

        Self {
            size,
            columns,
            solve_time,
            metadata,
        }
    }

    /// Reconstruct the placement this solution describes
    pub fn placement(&self) -> Placement {
        // Columns were validated when the solution was built
        Placement::from_columns(self.columns.clone())
            .unwrap_or_else(|_| Placement::new(self.size))
    }

    /// Check if this solution is equivalent to another (same assignment)
    pub fn is_equivalent_to(&self, other: &Solution) -> bool {
        self.columns == other.columns
    }

    /// Get a summary of the solution
    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            id: self.metadata.id.clone(),
            size: self.size,
            nodes_expanded: self.metadata.nodes_expanded,
            solve_time_ms: self.solve_time.as_millis() as u64,
            is_point_symmetric: self.metadata.is_point_symmetric,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl SolutionMetadata {
    /// Analyze a column assignment and create metadata
    pub fn analyze(columns: &[usize], statistics: &SearchStatistics) -> Self {
        Self {
            id: Self::generate_id(columns),
            nodes_expanded: statistics.nodes_expanded,
            backtracks: statistics.backtracks,
            is_point_symmetric: Self::is_point_symmetric(columns),
        }
    }

    /// Generate a stable ID from the column assignment
    fn generate_id(columns: &[usize]) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        columns.hash(&mut hasher);
        columns.len().hash(&mut hasher);

        format!("sol_{:x}", hasher.finish())
    }

    /// Check for symmetry under 180° rotation of the board: the queen in
    /// the mirrored row must sit in the mirrored column.
    fn is_point_symmetric(columns: &[usize]) -> bool {
        let size = columns.len();
        (0..size).all(|row| columns[size - 1 - row] == size - 1 - columns[row])
    }
}

/// Summary of a solution for display purposes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub id: String,
    pub size: usize,
    pub nodes_expanded: u64,
    pub solve_time_ms: u64,
    pub is_point_symmetric: bool,
}

impl std::fmt::Display for SolutionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution {}: {} queens, {} nodes, {}ms{}",
            self.id,
            self.size,
            self.nodes_expanded,
            self.solve_time_ms,
            if self.is_point_symmetric { ", point-symmetric" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(nodes: u64, backtracks: u64) -> SearchStatistics {
        SearchStatistics {
            nodes_expanded: nodes,
            backtracks,
            ..Default::default()
        }
    }

    #[test]
    fn test_solution_creation() {
        let solution = Solution::new(vec![1, 3, 0, 2], Duration::from_millis(5), &stats(8, 4));

        assert_eq!(solution.size, 4);
        assert_eq!(solution.metadata.nodes_expanded, 8);
        assert!(!solution.metadata.id.is_empty());
    }

    #[test]
    fn test_point_symmetry_detection() {
        // The canonical 4-queens solution is its own 180° rotation
        assert!(SolutionMetadata::is_point_symmetric(&[1, 3, 0, 2]));

        // The canonical 8-queens solution is not
        assert!(!SolutionMetadata::is_point_symmetric(&[0, 4, 7, 5, 2, 6, 1, 3]));
    }

    #[test]
    fn test_ids_are_stable_and_distinct() {
        let a = Solution::new(vec![1, 3, 0, 2], Duration::ZERO, &stats(8, 4));
        let b = Solution::new(vec![1, 3, 0, 2], Duration::ZERO, &stats(20, 12));
        let c = Solution::new(vec![2, 0, 3, 1], Duration::ZERO, &stats(8, 4));

        assert_eq!(a.metadata.id, b.metadata.id); // id depends on columns only
        assert_ne!(a.metadata.id, c.metadata.id);
        assert!(a.is_equivalent_to(&b));
        assert!(!a.is_equivalent_to(&c));
    }

    #[test]
    fn test_json_round_trip() {
        let solution = Solution::new(
            vec![0, 4, 7, 5, 2, 6, 1, 3],
            Duration::from_millis(2),
            &stats(113, 105),
        );

        let json = solution.to_json().unwrap();
        let restored = Solution::from_json(&json).unwrap();

        assert_eq!(restored.columns, solution.columns);
        assert_eq!(restored.metadata.id, solution.metadata.id);
        assert_eq!(restored.solve_time, Duration::ZERO); // not serialized
    }

    #[test]
    fn test_placement_reconstruction() {
        let solution = Solution::new(vec![1, 3, 0, 2], Duration::ZERO, &stats(8, 4));
        let placement = solution.placement();

        assert!(placement.is_complete());
        assert_eq!(placement.column(0), Some(1));
    }
}
