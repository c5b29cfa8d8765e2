//! Topic index and archive metadata commands.

use crate::error::Result;
use crate::output::Formatter;
use cartographer_store::JsonArchive;

/// Execute the topics command.
pub fn execute_topics(archive: &JsonArchive, formatter: &Formatter) -> Result<()> {
    let topics = archive.load_topics()?;
    println!("{}", formatter.format_topics(&topics)?);
    Ok(())
}

/// Execute the info command.
pub fn execute_info(archive: &JsonArchive, formatter: &Formatter) -> Result<()> {
    let metadata = archive.load_metadata()?;
    println!("{}", formatter.format_metadata(&metadata)?);
    Ok(())
}
