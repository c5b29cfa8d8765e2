//! Cartographer Storage Layer
//!
//! Implements the [`DomainSource`] trait over a read-only directory of JSON
//! documents (the "archive").
//!
//! # Failure model
//!
//! Index reads ([`JsonArchive::load_topics`], [`JsonArchive::load_metadata`])
//! return a [`StoreError`] and let the caller decide. Domain loads never fail:
//! every document that cannot be read or parsed becomes an empty collection
//! and a [`LoadDiagnostic`], logged at `warn` level.
//!
//! # Examples
//!
//! ```no_run
//! use cartographer_domain::DomainSource;
//! use cartographer_store::JsonArchive;
//!
//! let archive = JsonArchive::new("./akashic-archives-demo");
//! let load = archive.load_domain("quantum-computing");
//! println!("{} entities", load.domain.entities.len());
//! ```

#![warn(missing_docs)]

pub mod layout;
mod records;

pub use layout::ArchiveLayout;

use cartographer_domain::{
    ArchiveMetadata, DocumentKind, Domain, DomainLoad, DomainSource, LoadDiagnostic, Topic,
};
use records::{EntityRecord, MetadataRecord, RelationshipRecord, SourceRecord, TopicRecord};
use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading archive documents
#[derive(Error, Debug)]
pub enum StoreError {
    /// Document does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Document is not valid JSON of the expected shape
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Domain id cannot name a directory under the topics root
    #[error("Invalid domain id: {0:?}")]
    InvalidDomainId(String),
}

impl StoreError {
    /// Short reason suitable for a diagnostic line
    fn reason(&self) -> String {
        match self {
            StoreError::NotFound(_) => "file not found".to_string(),
            StoreError::Io { source, .. } => source.to_string(),
            StoreError::Parse { source, .. } => format!("invalid JSON: {}", source),
            StoreError::InvalidDomainId(id) => format!("invalid domain id {:?}", id),
        }
    }
}

/// JSON-file archive
///
/// Holds only the layout; every call reads fresh from disk.
#[derive(Debug, Clone)]
pub struct JsonArchive {
    layout: ArchiveLayout,
}

impl JsonArchive {
    /// Create an archive rooted at `base`
    ///
    /// The directory is not touched until something is loaded.
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            layout: ArchiveLayout::new(base),
        }
    }

    /// Read the topic index
    pub fn load_topics(&self) -> Result<Vec<Topic>, StoreError> {
        let records: Vec<TopicRecord> = read_json(&self.layout.topics_index())?;
        Ok(records.into_iter().map(Topic::from).collect())
    }

    /// Read the archive metadata
    pub fn load_metadata(&self) -> Result<ArchiveMetadata, StoreError> {
        let record: MetadataRecord = read_json(&self.layout.metadata())?;
        Ok(record.into())
    }

    /// Read one document of a domain as a list of `R` records
    fn load_document<R, T>(
        &self,
        domain_id: &str,
        document: DocumentKind,
        diagnostics: &mut Vec<LoadDiagnostic>,
    ) -> Vec<T>
    where
        R: DeserializeOwned,
        T: From<R>,
    {
        let result = self
            .layout
            .document(domain_id, document)
            .ok_or_else(|| StoreError::InvalidDomainId(domain_id.to_string()))
            .and_then(|path| read_json::<Vec<R>>(&path).map(|records| (path, records)));

        match result {
            Ok((path, records)) => {
                debug!(
                    domain = domain_id,
                    document = %document,
                    path = %path.display(),
                    count = records.len(),
                    "Loaded document"
                );
                records.into_iter().map(T::from).collect()
            }
            Err(e) => {
                let location = self
                    .layout
                    .document(domain_id, document)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| self.layout.base().display().to_string());

                warn!(
                    domain = domain_id,
                    document = %document,
                    "Degrading to empty collection: {}",
                    e
                );

                diagnostics.push(LoadDiagnostic {
                    domain_id: domain_id.to_string(),
                    document,
                    location,
                    reason: e.reason(),
                });
                Vec::new()
            }
        }
    }
}

impl DomainSource for JsonArchive {
    fn load_domain(&self, domain_id: &str) -> DomainLoad {
        let mut diagnostics = Vec::new();

        let entities =
            self.load_document::<EntityRecord, _>(domain_id, DocumentKind::Entities, &mut diagnostics);
        let relationships = self.load_document::<RelationshipRecord, _>(
            domain_id,
            DocumentKind::Relationships,
            &mut diagnostics,
        );
        let sources =
            self.load_document::<SourceRecord, _>(domain_id, DocumentKind::Sources, &mut diagnostics);

        DomainLoad {
            domain: Domain {
                entities,
                relationships,
                sources,
            },
            diagnostics,
        }
    }
}

/// Read and parse a JSON document
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
