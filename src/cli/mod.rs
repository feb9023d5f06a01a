//! Command-line interface: argument definitions and one handler per subcommand.

pub mod commands;
pub mod handlers;

pub use commands::{CategoryArg, Cli, Commands};
