//! Command-line debt payoff tracker built on `paydown_core`
//!
//! The binary owns persistence (YAML files under a per-user data
//! directory), logging, and table rendering; all simulation and ledger
//! mutation logic lives in the core crate.

#![warn(clippy::all)]

pub mod commands;
pub mod data;
pub mod logging;
pub mod util;

pub use logging::init_logging;
