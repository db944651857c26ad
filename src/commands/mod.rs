//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, DifficultyStats, run_benchmark};
pub use simple::run_simple;
