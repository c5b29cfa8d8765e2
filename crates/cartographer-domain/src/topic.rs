//! Archive index types

/// An entry of the archive's topic index
///
/// Each topic id names a domain directory under the archive's topics root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Topic {
    /// Domain id
    pub id: String,

    /// Title
    pub title: String,

    /// Short description
    pub description: String,
}

impl Topic {
    /// Create a new topic
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Archive-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveMetadata {
    /// Creation stamp, kept verbatim
    pub created: String,

    /// Domain ids the archive was generated with
    pub domains: Vec<String>,
}
