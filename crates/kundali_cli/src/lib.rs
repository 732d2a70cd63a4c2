//! The `kundali` command-line tool.
//!
//! Every subcommand prints one JSON document on stdout. Logs and errors go
//! to stderr.

pub mod cli;
pub mod error;
pub mod logging;
pub mod run;

pub use cli::{BirthArgs, Cli, Commands};
pub use error::CliError;
pub use run::{MatchInput, execute, run};
