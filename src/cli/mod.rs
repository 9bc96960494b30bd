//! Command-line interface for chromax.
//!
//! With no subcommand the gateway server starts; `lyrics` runs a single
//! resolver pass from the terminal.

mod commands;

pub use commands::{Cli, Commands, run_command};
