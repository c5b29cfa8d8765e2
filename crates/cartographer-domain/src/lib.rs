//! Cartographer Domain Layer
//!
//! This crate contains the knowledge-graph model and the pure operations over it.
//! It performs no I/O: loading is abstracted behind [`traits::DomainSource`] and
//! implemented by `cartographer-store`.
//!
//! ## Key Concepts
//!
//! - **Domain**: a named collection of entities, relationships and sources
//! - **Entity**: a graph node (id, name, type, description)
//! - **Relationship**: a directed, typed edge between two entity ids
//! - **Source**: a provenance record, not part of the graph topology
//! - **Topic**: an entry of the archive index naming an available domain
//!
//! ## Operations
//!
//! - [`merge::merge_domains`]: load several domains and merge them with de-duplication
//! - [`analysis::analyze`]: degree counting and cluster-center detection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod domain;
pub mod entity;
pub mod merge;
pub mod provenance;
pub mod relationship;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use analysis::{analyze, DegreeEntry, GraphAnalysis};
pub use domain::{DocumentKind, Domain, DomainLoad, LoadDiagnostic};
pub use entity::Entity;
pub use merge::{merge, merge_domains, DomainMerger, MergedDomain};
pub use provenance::Source;
pub use relationship::{Relationship, RelationshipKey};
pub use topic::{ArchiveMetadata, Topic};
pub use traits::{DomainSource, MemorySource};
