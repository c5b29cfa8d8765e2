//! Knowledge Cartographer CLI - explore a JSON knowledge-graph archive.

use anyhow::Context;
use cartographer_cli::commands;
use cartographer_cli::shell;
use cartographer_cli::{Cli, Command, Config, Formatter};
use cartographer_store::JsonArchive;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, `warn` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit config file must be readable; the default one is optional
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        }),
    };

    let base_dir = config.resolve_base_dir(cli.base.clone());
    tracing::debug!(base = %base_dir.display(), "Using archive");
    let archive = JsonArchive::new(&base_dir);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Shell) => shell::run_shell(&config, &archive, &formatter)?,
        Some(Command::Topics) => commands::execute_topics(&archive, &formatter)?,
        Some(Command::Info) => commands::execute_info(&archive, &formatter)?,
        Some(Command::Show(args)) => commands::execute_show(args, &archive, &formatter)?,
        Some(Command::Merge(args)) => commands::execute_merge(args, &archive, &formatter)?,
    }

    Ok(())
}
