//! Domain selection and loading shared by the shell and one-shot commands.
//!
//! Requested ids are checked against the topic index before anything is
//! loaded. A merge needs at least two valid ids; otherwise nothing is merged.

use crate::error::{CliError, Result};
use cartographer_domain::{merge_domains, Domain, DomainSource, LoadDiagnostic, Topic};
use tracing::{debug, info};

/// A domain (or merged aggregate) ready to be explored.
#[derive(Debug, Clone)]
pub struct Explored {
    /// Domain ids that make up this view, in load order
    pub domain_ids: Vec<String>,

    /// Loaded data
    pub domain: Domain,

    /// Documents that could not be read
    pub diagnostics: Vec<LoadDiagnostic>,
}

impl Explored {
    /// Whether this is a merge of several domains
    pub fn is_merged(&self) -> bool {
        self.domain_ids.len() > 1
    }

    /// Short label for menus and headings
    pub fn label(&self) -> String {
        self.domain_ids.join(" + ")
    }
}

/// Split a comma-separated list of domain ids, dropping blanks.
pub fn parse_domain_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_known(topics: &[Topic], id: &str) -> bool {
    topics.iter().any(|t| t.id == id)
}

/// Check a single domain id against the topic index.
pub fn select_domain(topics: &[Topic], requested: &str) -> Result<String> {
    let id = requested.trim();
    if is_known(topics, id) {
        Ok(id.to_string())
    } else {
        Err(CliError::InvalidInput(format!("Unknown domain: '{}'", id)))
    }
}

/// Keep the ids present in the topic index; at least two must remain.
pub fn select_merge_domains<I, S>(topics: &[Topic], requested: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<String> = requested
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|id| is_known(topics, id))
        .collect();

    if ids.len() < 2 {
        return Err(CliError::InvalidInput(format!(
            "At least two valid domain ids are required to merge (got {})",
            ids.len()
        )));
    }

    Ok(ids)
}

/// Validate and load one domain.
pub fn explore_domain<S>(source: &S, topics: &[Topic], requested: &str) -> Result<Explored>
where
    S: DomainSource + ?Sized,
{
    let id = select_domain(topics, requested)?;
    let load = source.load_domain(&id);

    debug!(
        domain = %id,
        entities = load.domain.entities.len(),
        relationships = load.domain.relationships.len(),
        sources = load.domain.sources.len(),
        "Domain loaded"
    );

    Ok(Explored {
        domain_ids: vec![id],
        domain: load.domain,
        diagnostics: load.diagnostics,
    })
}

/// Validate, load and merge several domains.
pub fn explore_merged<S, I, T>(source: &S, topics: &[Topic], requested: I) -> Result<Explored>
where
    S: DomainSource + ?Sized,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let ids = select_merge_domains(topics, requested)?;
    let merged = merge_domains(source, &ids);

    info!(
        domains = %merged.domain_ids.join(","),
        entities = merged.domain.entities.len(),
        relationships = merged.domain.relationships.len(),
        sources = merged.domain.sources.len(),
        "Domains merged"
    );

    Ok(Explored {
        domain_ids: merged.domain_ids,
        domain: merged.domain,
        diagnostics: merged.diagnostics,
    })
}
