//! Show command implementation.

use crate::cli::ShowArgs;
use crate::commands::explore::{explore_domain, Explored};
use crate::error::Result;
use crate::output::Formatter;
use cartographer_store::JsonArchive;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, archive: &JsonArchive, formatter: &Formatter) -> Result<()> {
    let topics = archive.load_topics()?;
    let explored = explore_domain(archive, &topics, &args.domain)?;
    print_explored(&explored, args.view, formatter)
}

/// Print diagnostics to stderr and the view to stdout.
pub(crate) fn print_explored(
    explored: &Explored,
    view: crate::cli::View,
    formatter: &Formatter,
) -> Result<()> {
    for diagnostic in &explored.diagnostics {
        eprintln!("{}", formatter.diagnostic(diagnostic));
    }
    println!("{}", formatter.format_view(view, &explored.domain)?);
    Ok(())
}
