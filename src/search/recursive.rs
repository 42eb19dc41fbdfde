//! Recursive backtracking search

use super::outcome::{SearchOutcome, SearchStatistics, SolveError};
use crate::board::{ConflictRules, Placement};
use std::time::Instant;

/// Depth-first backtracking search using the call stack, one frame per row
pub struct RecursiveSearch {
    statistics: SearchStatistics,
}

impl RecursiveSearch {
    /// Create a new search instance
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::default(),
        }
    }

    /// Run the search for a board of the given size. Each call starts from
    /// an empty placement, so repeated calls are independent.
    pub fn search(&mut self, size: usize) -> Result<SearchOutcome, SolveError> {
        if size == 0 {
            return Err(SolveError::InvalidSize(0));
        }

        let start_time = Instant::now();
        self.statistics = SearchStatistics::default();

        let mut placement = Placement::new(size);
        let solved = self.place_row(&mut placement, 0);
        self.statistics.solve_time = start_time.elapsed();

        if solved {
            Ok(SearchOutcome::Solved(placement))
        } else {
            Ok(SearchOutcome::Exhausted)
        }
    }

    /// Try to place a queen in `row` and every row below it. Columns are
    /// tried in ascending order, so the first complete placement found is
    /// the lexicographically smallest one.
    fn place_row(&mut self, placement: &mut Placement, row: usize) -> bool {
        if row == placement.size {
            return true; // All queens placed
        }

        for col in 0..placement.size {
            if ConflictRules::is_safe(placement, row, col) {
                placement.place(row, col);
                self.statistics.nodes_expanded += 1;
                self.statistics.max_depth = self.statistics.max_depth.max(row + 1);

                if self.place_row(placement, row + 1) {
                    return true;
                }

                // Backtrack
                placement.unplace(row);
                self.statistics.backtracks += 1;
            }
        }

        false // No column works for this row
    }

    /// Get statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl Default for RecursiveSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_board() {
        let mut search = RecursiveSearch::new();
        let outcome = search.search(1).unwrap();
        assert_eq!(outcome.placement().unwrap().as_columns(), Some(vec![0]));
    }

    #[test]
    fn test_unsolvable_boards_exhaust() {
        let mut search = RecursiveSearch::new();
        assert_eq!(search.search(2).unwrap(), SearchOutcome::Exhausted);
        assert_eq!(search.search(3).unwrap(), SearchOutcome::Exhausted);
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut search = RecursiveSearch::new();
        assert_eq!(search.search(0), Err(SolveError::InvalidSize(0)));
    }

    #[test]
    fn test_canonical_four_queens() {
        let mut search = RecursiveSearch::new();
        let outcome = search.search(4).unwrap();
        assert_eq!(outcome.placement().unwrap().as_columns(), Some(vec![1, 3, 0, 2]));
    }

    #[test]
    fn test_canonical_eight_queens() {
        let mut search = RecursiveSearch::new();
        let outcome = search.search(8).unwrap();
        assert_eq!(
            outcome.placement().unwrap().as_columns(),
            Some(vec![0, 4, 7, 5, 2, 6, 1, 3])
        );
    }

    #[test]
    fn test_solutions_are_conflict_free() {
        let mut search = RecursiveSearch::new();
        for size in 4..=10 {
            let outcome = search.search(size).unwrap();
            let placement = outcome.placement().unwrap();
            assert!(ConflictRules::placement_valid(placement), "size {}", size);
        }
    }

    #[test]
    fn test_repeated_searches_are_deterministic() {
        let mut search = RecursiveSearch::new();
        let first = search.search(8).unwrap();
        let second = search.search(8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_after_exhaustion_is_unaffected() {
        let mut search = RecursiveSearch::new();
        let _ = search.search(3).unwrap();

        let outcome = search.search(4).unwrap();
        assert_eq!(outcome.placement().unwrap().as_columns(), Some(vec![1, 3, 0, 2]));
    }

    #[test]
    fn test_statistics_populated() {
        let mut search = RecursiveSearch::new();
        let _ = search.search(8).unwrap();

        let stats = search.statistics();
        assert!(stats.nodes_expanded > 0);
        assert!(stats.backtracks > 0); // 8-queens cannot be solved greedily
        assert_eq!(stats.max_depth, 8);
    }
}
