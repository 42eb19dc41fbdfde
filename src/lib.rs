//! N-Queens Backtracking Solver
//!
//! This library provides functionality to place N queens on an N×N board
//! so that no two queens share a column or diagonal, using depth-first
//! backtracking with incremental conflict checking.

pub mod board;
pub mod config;
pub mod queens;
pub mod search;
pub mod utils;

pub use config::Settings;
pub use queens::{QueensProblem, Solution};
pub use search::{SearchOutcome, SolveError};

use anyhow::Result;

/// Main entry point for solving N-Queens problems
pub fn solve_queens(settings: Settings) -> Result<Option<Solution>> {
    let mut problem = QueensProblem::new(settings)?;
    problem.solve()
}
