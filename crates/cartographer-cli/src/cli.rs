//! CLI command definitions and argument parsing.

use crate::config::BASE_DIR_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Knowledge Cartographer - explore a JSON knowledge-graph archive.
#[derive(Debug, Parser)]
#[command(name = "cartographer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Archive root directory
    #[arg(short, long, global = true, env = BASE_DIR_ENV)]
    pub base: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the domains in the topic index
    Topics,

    /// Show archive metadata
    Info,

    /// Load one domain and print it
    Show(ShowArgs),

    /// Merge two or more domains and print the result
    Merge(MergeArgs),

    /// Enter the interactive shell
    Shell,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Domain id (as listed by `topics`)
    pub domain: String,

    /// What to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub view: View,
}

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Domain ids to merge, in priority order (first seen wins)
    #[arg(required = true, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub view: View,
}

/// A view over a loaded or merged domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Entity list
    Entities,
    /// Relationship list
    Relationships,
    /// Source list
    Sources,
    /// Degree analysis and cluster centers
    Analysis,
    /// Everything above
    All,
}

impl View {
    /// Single views, in display order
    pub const SECTIONS: [View; 4] = [
        View::Entities,
        View::Relationships,
        View::Sources,
        View::Analysis,
    ];
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
