//! Independent validation of claimed queen placements

use crate::board::{ConflictRules, Placement};
use crate::config::Settings;
use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;

/// Validates placements against the N-Queens constraints, independently of
/// how they were produced
pub struct SolutionValidator {
    settings: Settings,
}

/// Result of placement validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<ConflictViolation>,
    pub error_message: Option<String>,
    pub metrics: ValidationMetrics,
}

/// Represents a pair of queens attacking each other
#[derive(Debug, Clone)]
pub struct ConflictViolation {
    pub row_a: usize,
    pub col_a: usize,
    pub row_b: usize,
    pub col_b: usize,
    pub kind: ConflictKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    SharedColumn,
    SharedDiagonal,
}

/// Performance metrics for validation
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    pub validation_time_ms: u64,
    pub pairs_checked: usize,
}

impl SolutionValidator {
    /// Create a new solution validator
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Validate that a placement is complete and conflict-free for the
    /// configured board size
    pub fn validate(&self, placement: &Placement) -> Result<ValidationResult> {
        let start_time = std::time::Instant::now();

        // Check board dimensions
        if placement.size != self.settings.board.size {
            return Ok(ValidationResult {
                is_valid: false,
                violations: vec![],
                error_message: Some(format!(
                    "Board size mismatch: placement has {} rows, configuration expects {}",
                    placement.size, self.settings.board.size
                )),
                metrics: ValidationMetrics::default(),
            });
        }

        // Check completeness
        if !placement.is_complete() {
            let unplaced: Vec<usize> = (0..placement.size)
                .filter(|&row| placement.column(row).is_none())
                .collect();
            return Ok(ValidationResult {
                is_valid: false,
                violations: vec![],
                error_message: Some(format!(
                    "Placement is incomplete: rows {:?} hold no queen",
                    unplaced
                )),
                metrics: ValidationMetrics::default(),
            });
        }

        // Sweep every pair of committed queens. The pairs are independent,
        // so the sweep can run in parallel; the search itself stays
        // sequential.
        let pairs: Vec<((usize, usize), (usize, usize))> =
            placement.committed().into_iter().tuple_combinations().collect();
        let pairs_checked = pairs.len();

        let violations: Vec<ConflictViolation> = pairs
            .into_par_iter()
            .filter_map(|((row_a, col_a), (row_b, col_b))| {
                Self::check_pair(row_a, col_a, row_b, col_b)
            })
            .collect();

        let validation_time = start_time.elapsed();
        let is_valid = violations.is_empty();

        let error_message = if !is_valid {
            Some(Self::generate_error_message(&violations))
        } else {
            None
        };

        Ok(ValidationResult {
            is_valid,
            violations,
            error_message,
            metrics: ValidationMetrics {
                validation_time_ms: validation_time.as_millis() as u64,
                pairs_checked,
            },
        })
    }

    /// Classify the conflict between two queens, if any
    fn check_pair(
        row_a: usize,
        col_a: usize,
        row_b: usize,
        col_b: usize,
    ) -> Option<ConflictViolation> {
        if !ConflictRules::attacks(row_a, col_a, row_b, col_b) {
            return None;
        }

        let kind = if col_a == col_b {
            ConflictKind::SharedColumn
        } else {
            ConflictKind::SharedDiagonal
        };

        Some(ConflictViolation {
            row_a,
            col_a,
            row_b,
            col_b,
            kind,
            description: format!(
                "Queens at ({}, {}) and ({}, {}) share a {}",
                row_a,
                col_a,
                row_b,
                col_b,
                match kind {
                    ConflictKind::SharedColumn => "column",
                    ConflictKind::SharedDiagonal => "diagonal",
                }
            ),
        })
    }

    /// Generate a descriptive error message from the violations found
    fn generate_error_message(violations: &[ConflictViolation]) -> String {
        let mut message = format!("Found {} attacking pair(s). ", violations.len());

        for (i, violation) in violations.iter().take(3).enumerate() {
            if i == 0 {
                message.push_str("Examples: ");
            }
            message.push_str(&format!("{}; ", violation.description));
        }

        if violations.len() > 3 {
            message.push_str(&format!("... and {} more", violations.len() - 3));
        }

        message
    }

    /// Quick validation without violation details
    pub fn quick_validate(&self, placement: &Placement) -> bool {
        placement.size == self.settings.board.size && ConflictRules::placement_valid(placement)
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Validation Result: {}", if self.is_valid { "VALID" } else { "INVALID" })?;

        if let Some(ref error) = self.error_message {
            writeln!(f, "Error: {}", error)?;
        }

        writeln!(f, "Attacking pairs: {}", self.violations.len())?;
        writeln!(f, "Pairs checked: {}", self.metrics.pairs_checked)?;
        writeln!(f, "Validation time: {}ms", self.metrics.validation_time_ms)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator_for_size(size: usize) -> SolutionValidator {
        let mut settings = Settings::default();
        settings.board.size = size;
        SolutionValidator::new(settings)
    }

    #[test]
    fn test_valid_classic_solution() {
        let validator = validator_for_size(8);
        let placement = Placement::from_columns(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();

        let result = validator.validate(&placement).unwrap();
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
        assert_eq!(result.metrics.pairs_checked, 28); // C(8, 2)
    }

    #[test]
    fn test_column_conflict_reported() {
        let validator = validator_for_size(4);
        let mut placement = Placement::new(4);
        placement.place(0, 2);
        placement.place(1, 0);
        placement.place(2, 3);
        placement.place(3, 0); // shares a column with row 1

        let result = validator.validate(&placement).unwrap();
        assert!(!result.is_valid);

        let column_clash = result
            .violations
            .iter()
            .find(|v| v.kind == ConflictKind::SharedColumn)
            .expect("expected a column conflict");
        assert_eq!((column_clash.row_a, column_clash.row_b), (1, 3));
    }

    #[test]
    fn test_diagonal_conflict_reported() {
        let validator = validator_for_size(4);
        let placement = Placement::from_columns(vec![0, 1, 3, 2]).unwrap();

        let result = validator.validate(&placement).unwrap();
        assert!(!result.is_valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.kind == ConflictKind::SharedDiagonal));
        assert!(result.error_message.unwrap().contains("diagonal"));
    }

    #[test]
    fn test_size_mismatch() {
        let validator = validator_for_size(8);
        let placement = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();

        let result = validator.validate(&placement).unwrap();
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("size mismatch"));
    }

    #[test]
    fn test_incomplete_placement() {
        let validator = validator_for_size(4);
        let mut placement = Placement::new(4);
        placement.place(0, 1);

        let result = validator.validate(&placement).unwrap();
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("incomplete"));
    }

    #[test]
    fn test_quick_validate() {
        let validator = validator_for_size(4);

        let good = Placement::from_columns(vec![1, 3, 0, 2]).unwrap();
        assert!(validator.quick_validate(&good));

        let bad = Placement::from_columns(vec![0, 1, 3, 2]).unwrap();
        assert!(!validator.quick_validate(&bad));
    }
}
