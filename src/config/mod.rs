//! Configuration management for the N-Queens solver

pub mod settings;

pub use settings::{
    Settings, BoardConfig, SolverConfig, OutputConfig,
    SearchEngine, OutputFormat, CliOverrides,
};
