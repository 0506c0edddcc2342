//! eqviz-cli library
//!
//! Command definitions and the runner behind the `eqviz` binary, exported for
//! tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod dataset_commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{connect, execute, render, run};
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
