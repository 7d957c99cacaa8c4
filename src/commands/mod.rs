//! Command implementations

pub mod session;
pub mod simple;
pub mod simulate;

pub use session::SessionStats;
pub use simple::{run_simple, run_simple_with};
pub use simulate::{RoundResult, SimulationConfig, SimulationResult, run_simulation};
