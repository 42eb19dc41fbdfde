//! Factory for creating search engine instances based on configuration

use super::iterative::IterativeSearch;
use super::outcome::{SearchOutcome, SearchStatistics, SolveError};
use super::recursive::RecursiveSearch;
use crate::config::SearchEngine;

/// Unified search interface that can use different engines
pub enum UnifiedSearch {
    Recursive(RecursiveSearch),
    Iterative(IterativeSearch),
}

impl UnifiedSearch {
    /// Create a new search instance based on the specified engine
    pub fn new(engine: SearchEngine) -> Self {
        match engine {
            SearchEngine::Recursive => UnifiedSearch::Recursive(RecursiveSearch::new()),
            SearchEngine::Iterative => UnifiedSearch::Iterative(IterativeSearch::new()),
        }
    }

    /// Run the search for a board of the given size
    pub fn search(&mut self, size: usize) -> Result<SearchOutcome, SolveError> {
        match self {
            UnifiedSearch::Recursive(search) => search.search(size),
            UnifiedSearch::Iterative(search) => search.search(size),
        }
    }

    /// Get statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        match self {
            UnifiedSearch::Recursive(search) => search.statistics(),
            UnifiedSearch::Iterative(search) => search.statistics(),
        }
    }

    /// Get the engine type being used
    pub fn engine(&self) -> SearchEngine {
        match self {
            UnifiedSearch::Recursive(_) => SearchEngine::Recursive,
            UnifiedSearch::Iterative(_) => SearchEngine::Iterative,
        }
    }
}

impl Default for UnifiedSearch {
    fn default() -> Self {
        UnifiedSearch::Recursive(RecursiveSearch::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_engine_creation() {
        let search = UnifiedSearch::new(SearchEngine::Recursive);
        assert_eq!(search.engine(), SearchEngine::Recursive);
    }

    #[test]
    fn test_iterative_engine_creation() {
        let search = UnifiedSearch::new(SearchEngine::Iterative);
        assert_eq!(search.engine(), SearchEngine::Iterative);
    }

    #[test]
    fn test_both_engines_find_canonical_solution() {
        for engine in [SearchEngine::Recursive, SearchEngine::Iterative] {
            let mut search = UnifiedSearch::new(engine);
            let outcome = search.search(8).unwrap();
            assert_eq!(
                outcome.placement().unwrap().as_columns(),
                Some(vec![0, 4, 7, 5, 2, 6, 1, 3])
            );
        }
    }

    #[test]
    fn test_both_engines_exhaust_unsolvable_sizes() {
        for engine in [SearchEngine::Recursive, SearchEngine::Iterative] {
            let mut search = UnifiedSearch::new(engine);
            assert_eq!(search.search(2).unwrap(), SearchOutcome::Exhausted);
            assert_eq!(search.search(3).unwrap(), SearchOutcome::Exhausted);
        }
    }

    #[test]
    fn test_invalid_size_propagates() {
        let mut search = UnifiedSearch::default();
        assert_eq!(search.search(0), Err(SolveError::InvalidSize(0)));
    }
}
