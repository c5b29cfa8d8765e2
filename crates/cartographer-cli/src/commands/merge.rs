//! Merge command implementation.

use crate::cli::MergeArgs;
use crate::commands::explore::explore_merged;
use crate::commands::show::print_explored;
use crate::error::Result;
use crate::output::Formatter;
use cartographer_store::JsonArchive;

/// Execute the merge command.
pub fn execute_merge(args: MergeArgs, archive: &JsonArchive, formatter: &Formatter) -> Result<()> {
    let topics = archive.load_topics()?;
    let explored = explore_merged(archive, &topics, &args.domains)?;

    eprintln!(
        "{}",
        formatter.banner(&format!("Merged domains: {}", explored.domain_ids.join(", ")))
    );
    print_explored(&explored, args.view, formatter)
}
