//! Graph analysis: degree counting and cluster centers
//!
//! The degree of an id is the number of relationship endpoints referencing it,
//! regardless of direction. A self-loop counts twice. Every id attaining the
//! maximum degree is a cluster center; ties are not broken.

use crate::{Domain, Entity};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Degree of one id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeEntry {
    /// Entity id as referenced by relationships
    pub id: String,

    /// Entity name, or the raw id when the id is not a loaded entity
    pub label: String,

    /// Number of relationship endpoints referencing this id
    pub degree: usize,
}

/// Result of [`analyze`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphAnalysis {
    /// Degrees in order of first appearance in the relationship sequence
    pub degrees: Vec<DegreeEntry>,

    /// Every entry whose degree equals the maximum, in the same order
    pub cluster_centers: Vec<DegreeEntry>,
}

impl GraphAnalysis {
    /// Highest degree observed, `None` when there are no relationships
    pub fn max_degree(&self) -> Option<usize> {
        self.degrees.iter().map(|d| d.degree).max()
    }

    /// Degree of a given id, `None` when no relationship references it
    pub fn degree_of(&self, id: &str) -> Option<usize> {
        self.degrees.iter().find(|d| d.id == id).map(|d| d.degree)
    }

    /// Whether the domain had no relationships
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

/// Count endpoint degrees and find the cluster centers of a domain
///
/// # Examples
///
/// ```
/// use cartographer_domain::{analyze, Domain, Relationship};
///
/// let domain = Domain {
///     relationships: vec![
///         Relationship::new("x", "y", "knows"),
///         Relationship::new("y", "z", "knows"),
///     ],
///     ..Domain::default()
/// };
///
/// let analysis = analyze(&domain);
/// assert_eq!(analysis.degree_of("y"), Some(2));
/// assert_eq!(analysis.cluster_centers.len(), 1);
/// assert_eq!(analysis.cluster_centers[0].id, "y");
/// ```
pub fn analyze(domain: &Domain) -> GraphAnalysis {
    // First occurrence of an id names it
    let mut labels: HashMap<&str, &Entity> = HashMap::new();
    for entity in &domain.entities {
        labels.entry(entity.id.as_str()).or_insert(entity);
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for relationship in &domain.relationships {
        *counts.entry(relationship.source.as_str()).or_insert(0) += 1;
        *counts.entry(relationship.target.as_str()).or_insert(0) += 1;
    }

    let degrees: Vec<DegreeEntry> = counts
        .into_iter()
        .map(|(id, degree)| DegreeEntry {
            id: id.to_string(),
            label: labels
                .get(id)
                .map_or(id, |entity| entity.display_name())
                .to_string(),
            degree,
        })
        .collect();

    let cluster_centers = match degrees.iter().map(|d| d.degree).max() {
        Some(max) => degrees.iter().filter(|d| d.degree == max).cloned().collect(),
        None => Vec::new(),
    };

    GraphAnalysis {
        degrees,
        cluster_centers,
    }
}
