//! Queen attack rules and safety tests

use super::Placement;

/// Conflict rules engine for queen placements
pub struct ConflictRules;

impl ConflictRules {
    /// Check whether two queens attack each other. Rows are distinct by
    /// construction (one queen per row), so only columns and diagonals
    /// are tested.
    pub fn attacks(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
        if col_a == col_b {
            return true;
        }

        let row_delta = row_a.abs_diff(row_b);
        let col_delta = col_a.abs_diff(col_b);
        row_delta == col_delta
    }

    /// Test safety of a candidate (row, col) against every queen committed
    /// in rows below it
    pub fn is_safe(placement: &Placement, row: usize, col: usize) -> bool {
        for prev_row in 0..row {
            if let Some(prev_col) = placement.column(prev_row) {
                if Self::attacks(prev_row, prev_col, row, col) {
                    return false;
                }
            }
        }
        true
    }

    /// Check that a placement is complete and free of conflicts
    pub fn placement_valid(placement: &Placement) -> bool {
        if !placement.is_complete() {
            return false;
        }

        let committed = placement.committed();
        for (i, &(row_a, col_a)) in committed.iter().enumerate() {
            for &(row_b, col_b) in &committed[i + 1..] {
                if Self::attacks(row_a, col_a, row_b, col_b) {
                    return false;
                }
            }
        }
        true
    }
}
