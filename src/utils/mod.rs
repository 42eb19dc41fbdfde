//! Display and console output helpers

pub mod display;

pub use display::{SolutionFormatter, ColorOutput, Color};
