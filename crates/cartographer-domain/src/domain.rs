//! Domain module - the unit of loading

use crate::{Entity, Relationship, Source};
use std::fmt;

/// A knowledge domain: entities, relationships and sources
///
/// Loading and merging both produce this shape. Collections keep the order
/// they were read or merged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain {
    /// Graph nodes
    pub entities: Vec<Entity>,

    /// Graph edges
    pub relationships: Vec<Relationship>,

    /// Provenance records
    pub sources: Vec<Source>,
}

impl Domain {
    /// Create an empty domain
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty() && self.sources.is_empty()
    }

    /// Look up an entity by id (first occurrence)
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}

/// The three documents a domain is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `entities.json`
    Entities,
    /// `relationships.json`
    Relationships,
    /// `sources.json`
    Sources,
}

impl DocumentKind {
    /// All document kinds, in load order
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Entities,
        DocumentKind::Relationships,
        DocumentKind::Sources,
    ];

    /// File name of the document inside a domain directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Entities => "entities.json",
            DocumentKind::Relationships => "relationships.json",
            DocumentKind::Sources => "sources.json",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Entities => "entities",
            DocumentKind::Relationships => "relationships",
            DocumentKind::Sources => "sources",
        };
        f.write_str(name)
    }
}

/// Why one document of a domain was replaced by an empty collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    /// Domain id being loaded
    pub domain_id: String,

    /// Document that failed
    pub document: DocumentKind,

    /// Where the document was looked for
    pub location: String,

    /// Human-readable reason
    pub reason: String,
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} unavailable ({}): {}",
            self.domain_id, self.document, self.location, self.reason
        )
    }
}

/// Result of loading one domain
///
/// `domain` is always well-shaped; a document that could not be read shows
/// up as an empty collection plus an entry in `diagnostics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainLoad {
    /// Loaded (possibly partially empty) domain
    pub domain: Domain,

    /// One entry per degraded document
    pub diagnostics: Vec<LoadDiagnostic>,
}

impl DomainLoad {
    /// A load with no diagnostics
    pub fn clean(domain: Domain) -> Self {
        Self {
            domain,
            diagnostics: Vec::new(),
        }
    }

    /// Whether every document was read
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
