//! Search results, statistics, and the solver error type

use crate::board::Placement;
use std::time::Duration;
use thiserror::Error;

/// Errors a search can report before doing any work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The caller asked for a board with fewer than one row. This is a
    /// contract violation, distinct from an exhaustive search coming up
    /// empty.
    #[error("invalid board size {0}: the board must have at least one row")]
    InvalidSize(i64),
}

/// Result of running a search to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete, conflict-free placement was found
    Solved(Placement),
    /// Every branch was explored and none admits a full placement.
    /// A normal outcome for 2×2 and 3×3 boards, not an error.
    Exhausted,
}

impl SearchOutcome {
    /// Check whether the search found a placement
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// Get the placement, if one was found
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            SearchOutcome::Solved(placement) => Some(placement),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Statistics about the search process
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Queens committed during the search, including ones later retracted
    pub nodes_expanded: u64,
    /// Commitments undone after a dead end
    pub backtracks: u64,
    /// Deepest row count reached (equals the board size on success)
    pub max_depth: usize,
    /// Wall-clock time of the search
    pub solve_time: Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes expanded: {}", self.nodes_expanded)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Max depth: {}", self.max_depth)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let placement = Placement::from_columns(vec![0]).unwrap();
        let solved = SearchOutcome::Solved(placement.clone());

        assert!(solved.is_solved());
        assert_eq!(solved.placement(), Some(&placement));

        let exhausted = SearchOutcome::Exhausted;
        assert!(!exhausted.is_solved());
        assert_eq!(exhausted.placement(), None);
    }

    #[test]
    fn test_error_message_names_the_size() {
        let error = SolveError::InvalidSize(-3);
        assert!(error.to_string().contains("-3"));
    }
}
