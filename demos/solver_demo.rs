//! Demonstration of the search engines
//!
//! This example shows how to run both the recursive and iterative
//! backtracking engines through the unified interface and check that
//! they agree.

use n_queens_solver::board::ConflictRules;
use n_queens_solver::config::SearchEngine;
use n_queens_solver::search::{SearchOutcome, UnifiedSearch};
use n_queens_solver::utils::SolutionFormatter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Search Engine Demonstration ===\n");

    test_engine(SearchEngine::Recursive)?;
    test_engine(SearchEngine::Iterative)?;

    println!("All engines working correctly!");
    Ok(())
}

fn test_engine(engine: SearchEngine) -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing {:?} engine:", engine);

    // Test 1: the classic 8-queens board
    println!("  Test 1: 8-queens");
    let mut search = UnifiedSearch::new(engine);
    let start = std::time::Instant::now();
    let outcome = search.search(8)?;
    let solve_time = start.elapsed();

    match outcome {
        SearchOutcome::Solved(ref placement) => {
            if !ConflictRules::placement_valid(placement) {
                return Err("placement fails the conflict check".into());
            }
            println!("    Solved in {:.3}ms", solve_time.as_secs_f64() * 1000.0);
            print!("{}", indent(&SolutionFormatter::format_board_compact(placement)));
        }
        SearchOutcome::Exhausted => {
            return Err("expected a solution but the search exhausted".into());
        }
    }

    // Test 2: a board with no solution
    println!("  Test 2: 3-queens (unsolvable)");
    let mut search = UnifiedSearch::new(engine);
    match search.search(3)? {
        SearchOutcome::Exhausted => {
            println!("    Correctly proved no placement exists");
        }
        SearchOutcome::Solved(_) => {
            return Err("expected exhaustion but got a placement".into());
        }
    }

    // Test 3: statistics
    let mut search = UnifiedSearch::new(engine);
    let _ = search.search(8)?;
    let stats = search.statistics();

    println!("  Statistics:");
    println!("    Nodes expanded: {}", stats.nodes_expanded);
    println!("    Backtracks: {}", stats.backtracks);

    println!("  {:?} engine tests completed successfully\n", engine);
    Ok(())
}

fn indent(board: &str) -> String {
    board
        .lines()
        .map(|line| format!("    {}\n", line))
        .collect()
}
