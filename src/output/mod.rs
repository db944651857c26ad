//! Terminal output formatting
//!
//! Display utilities for the text board and command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, write_board};
