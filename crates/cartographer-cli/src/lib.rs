//! Knowledge Cartographer CLI library.
//!
//! This library provides the core functionality for the `cartographer` command-line
//! interface, including configuration management, command execution, output
//! formatting and the interactive shell.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod shell;

pub use cli::{Cli, Command, View};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
