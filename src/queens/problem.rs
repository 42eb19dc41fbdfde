//! N-Queens problem definition

use super::{Solution, SolutionValidator};
use crate::config::{SearchEngine, Settings};
use crate::search::{SearchOutcome, SearchStatistics, UnifiedSearch};
use anyhow::{Context, Result};
use std::time::Instant;

/// Represents an N-Queens problem for a configured board size
pub struct QueensProblem {
    settings: Settings,
    engine: UnifiedSearch,
    validator: SolutionValidator,
}

impl QueensProblem {
    /// Create a new problem from settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Configuration validation failed")?;

        let engine = UnifiedSearch::new(settings.solver.engine);
        let validator = SolutionValidator::new(settings.clone());

        Ok(Self {
            settings,
            engine,
            validator,
        })
    }

    /// Create a problem for an explicit board size with default settings
    /// (useful for testing)
    pub fn with_size(size: usize) -> Result<Self> {
        let mut settings = Settings::default();
        settings.board.size = size;
        Self::new(settings)
    }

    /// Solve the problem. Returns the canonical first solution, or None
    /// when the exhaustive search proves no placement exists.
    pub fn solve(&mut self) -> Result<Option<Solution>> {
        let size = self.settings.board.size;
        let start_time = Instant::now();

        println!("Solving {}-queens with the {:?} engine...", size, self.engine.engine());

        let outcome = self.engine.search(size)?;
        let solve_time = start_time.elapsed();

        let placement = match outcome {
            SearchOutcome::Solved(placement) => placement,
            SearchOutcome::Exhausted => {
                println!(
                    "Search exhausted: no {}-queens placement exists ({:.3}s)",
                    size,
                    solve_time.as_secs_f64()
                );
                return Ok(None);
            }
        };

        // A placement the engine hands back must survive the independent
        // check; failing here means the search itself is broken.
        if self.settings.solver.verify_solution {
            let validation = self
                .validator
                .validate(&placement)
                .context("Failed to validate solution")?;
            if !validation.is_valid {
                anyhow::bail!(
                    "Search produced an invalid placement: {}",
                    validation.error_message.unwrap_or_else(|| "unknown error".to_string())
                );
            }
        }

        let columns = placement
            .as_columns()
            .context("Search returned an incomplete placement")?;

        let statistics = self.engine.statistics();
        println!(
            "Found a solution in {:.3}s ({} nodes, {} backtracks)",
            solve_time.as_secs_f64(),
            statistics.nodes_expanded,
            statistics.backtracks
        );

        Ok(Some(Solution::new(columns, solve_time, statistics)))
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        self.engine.statistics()
    }

    /// Predict how the search will go without running it
    pub fn estimate_solvability(&self) -> SolvabilityEstimate {
        let size = self.settings.board.size;

        let expectation = match size {
            1 => SolveExpectation::Trivial,
            2 | 3 => SolveExpectation::Unsolvable,
            _ => SolveExpectation::Solvable,
        };

        let effort = match size {
            0..=12 => SearchEffort::Low,
            13..=20 => SearchEffort::Medium,
            21..=28 => SearchEffort::High,
            _ => SearchEffort::VeryHigh,
        };

        let notes = self.generate_notes(size, expectation, effort);

        SolvabilityEstimate {
            board_size: size,
            expectation,
            effort,
            notes,
        }
    }

    fn generate_notes(
        &self,
        size: usize,
        expectation: SolveExpectation,
        effort: SearchEffort,
    ) -> Vec<String> {
        let mut notes = Vec::new();

        if expectation == SolveExpectation::Unsolvable {
            notes.push(format!(
                "No {}-queens placement exists; the search will terminate quickly with that proof",
                size
            ));
        }

        match effort {
            SearchEffort::High | SearchEffort::VeryHigh => {
                notes.push("Worst-case search cost grows exponentially with the board size".to_string());
                if self.settings.solver.engine == SearchEngine::Recursive {
                    notes.push("The iterative engine keeps stack usage flat on large boards".to_string());
                }
            }
            _ => {}
        }

        if notes.is_empty() {
            notes.push("Problem looks reasonable to solve".to_string());
        }

        notes
    }
}

/// Estimate of how a solve attempt will behave
#[derive(Debug, Clone)]
pub struct SolvabilityEstimate {
    pub board_size: usize,
    pub expectation: SolveExpectation,
    pub effort: SearchEffort,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveExpectation {
    /// One queen on a 1×1 board
    Trivial,
    /// 2×2 and 3×3 boards admit no placement
    Unsolvable,
    /// Every size from 4 upward has a solution
    Solvable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffort {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for SolvabilityEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solvability Estimate:")?;
        writeln!(f, "  Board size: {}", self.board_size)?;
        writeln!(f, "  Expectation: {:?}", self.expectation)?;
        writeln!(f, "  Search effort: {:?}", self.effort)?;
        writeln!(f, "  Notes:")?;
        for note in &self.notes {
            writeln!(f, "    - {}", note)?;
        }
        Ok(())
    }
}
