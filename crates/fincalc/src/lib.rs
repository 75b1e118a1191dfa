//! Command-line shell for the fincalc calculators
//!
//! Argument parsing, saved defaults, logging, and table/JSON rendering around
//! the pure computations in `fincalc_core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod logging;

pub use cli::{Args, Command, OutputFormat};
pub use config::CalculatorConfig;
pub use logging::init_logging;
