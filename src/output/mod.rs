//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_pool_summary, print_simulation_result, write_outcome, write_round};
pub use formatters::describe_outcome;
