//! Domain merging with first-seen-wins de-duplication
//!
//! Entities and sources are keyed by id, relationships by
//! (source, target, type). Records are appended in input order and only when
//! their key has not been seen; later duplicates are dropped silently.

use crate::{Domain, DomainSource, LoadDiagnostic, RelationshipKey};
use std::collections::HashSet;

/// Accumulates domains into one merged domain
///
/// # Examples
///
/// ```
/// use cartographer_domain::{Domain, DomainMerger, Entity};
///
/// let a = Domain { entities: vec![Entity::new("e1", "Alpha")], ..Domain::default() };
/// let b = Domain { entities: vec![Entity::new("e1", "Alpha-dup")], ..Domain::default() };
///
/// let mut merger = DomainMerger::new();
/// merger.push(&a);
/// merger.push(&b);
/// let merged = merger.finish();
///
/// assert_eq!(merged.entities.len(), 1);
/// assert_eq!(merged.entities[0].name, "Alpha");
/// ```
#[derive(Debug, Default)]
pub struct DomainMerger {
    merged: Domain,
    entity_ids: HashSet<String>,
    relationship_keys: HashSet<RelationshipKey>,
    source_ids: HashSet<String>,
}

impl DomainMerger {
    /// Create an empty merger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of `domain` whose keys have not been seen yet
    pub fn push(&mut self, domain: &Domain) {
        for entity in &domain.entities {
            if self.entity_ids.insert(entity.id.clone()) {
                self.merged.entities.push(entity.clone());
            }
        }

        for relationship in &domain.relationships {
            if self.relationship_keys.insert(relationship.key()) {
                self.merged.relationships.push(relationship.clone());
            }
        }

        for source in &domain.sources {
            if self.source_ids.insert(source.id.clone()) {
                self.merged.sources.push(source.clone());
            }
        }
    }

    /// Consume the merger and return the merged domain
    pub fn finish(self) -> Domain {
        self.merged
    }
}

/// Merge already-loaded domains in order
pub fn merge<'a, I>(domains: I) -> Domain
where
    I: IntoIterator<Item = &'a Domain>,
{
    let mut merger = DomainMerger::new();
    for domain in domains {
        merger.push(domain);
    }
    merger.finish()
}

/// Outcome of [`merge_domains`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedDomain {
    /// Domain ids in the order they were merged
    pub domain_ids: Vec<String>,

    /// The merged aggregate
    pub domain: Domain,

    /// Diagnostics of every underlying load
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Load each domain id from `source` in order and merge the results
///
/// Never fails. Domains that cannot be loaded contribute empty collections.
/// Repeating an id is harmless: its records are all duplicates the second time.
pub fn merge_domains<S, I>(source: &S, domain_ids: I) -> MergedDomain
where
    S: DomainSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut merger = DomainMerger::new();
    let mut ids = Vec::new();
    let mut diagnostics = Vec::new();

    for domain_id in domain_ids {
        let domain_id = domain_id.as_ref();
        let load = source.load_domain(domain_id);
        merger.push(&load.domain);
        diagnostics.extend(load.diagnostics);
        ids.push(domain_id.to_string());
    }

    MergedDomain {
        domain_ids: ids,
        domain: merger.finish(),
        diagnostics,
    }
}
