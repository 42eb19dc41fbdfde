//! Iterative backtracking search with an explicit stack

use super::outcome::{SearchOutcome, SearchStatistics, SolveError};
use crate::board::{ConflictRules, Placement};
use std::time::Instant;

/// Depth-first backtracking search driven by an explicit per-row column
/// cursor instead of recursion. Visits candidates in exactly the same
/// order as [`RecursiveSearch`](super::RecursiveSearch), so both engines
/// return the identical placement; this form keeps stack usage flat for
/// very large boards.
pub struct IterativeSearch {
    statistics: SearchStatistics,
}

impl IterativeSearch {
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

        let outcome = self.run(size);
        self.statistics.solve_time = start_time.elapsed();
        Ok(outcome)
    }

    fn run(&mut self, size: usize) -> SearchOutcome {
        let mut placement = Placement::new(size);
        // next_col[row] is the first column not yet tried in that row
        let mut next_col = vec![0usize; size];
        let mut row = 0usize;

        loop {
            if row == size {
                return SearchOutcome::Solved(placement); // All queens placed
            }

            let mut advanced = false;
            while next_col[row] < size {
                let col = next_col[row];
                next_col[row] += 1;

                if ConflictRules::is_safe(&placement, row, col) {
                    placement.place(row, col);
                    self.statistics.nodes_expanded += 1;
                    self.statistics.max_depth = self.statistics.max_depth.max(row + 1);
                    advanced = true;
                    break;
                }
            }

            if advanced {
                row += 1;
                continue;
            }

            // Row exhausted: reset its cursor and backtrack
            next_col[row] = 0;
            if row == 0 {
                return SearchOutcome::Exhausted;
            }
            row -= 1;
            placement.unplace(row);
            self.statistics.backtracks += 1;
        }
    }

    /// Get statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl Default for IterativeSearch {
    fn default() -> Self {
        Self::new()
    }
}
