//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! The JSON archive implementation lives in `cartographer-store`.

use crate::{Domain, DomainLoad};
use std::collections::HashMap;

/// Something domains can be loaded from
///
/// Implemented by the infrastructure layer (cartographer-store).
/// Loading never fails: unreadable documents degrade to empty collections
/// and are reported through [`DomainLoad::diagnostics`].
pub trait DomainSource {
    /// Load a domain by id, reading it fresh on every call
    fn load_domain(&self, domain_id: &str) -> DomainLoad;
}

impl<T: DomainSource + ?Sized> DomainSource for &T {
    fn load_domain(&self, domain_id: &str) -> DomainLoad {
        (**self).load_domain(domain_id)
    }
}

/// In-memory domain source
///
/// Unknown ids load as an empty domain without diagnostics.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    domains: HashMap<String, Domain>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain under an id
    pub fn with_domain(mut self, domain_id: impl Into<String>, domain: Domain) -> Self {
        self.domains.insert(domain_id.into(), domain);
        self
    }
}

impl DomainSource for MemorySource {
    fn load_domain(&self, domain_id: &str) -> DomainLoad {
        DomainLoad::clean(self.domains.get(domain_id).cloned().unwrap_or_default())
    }
}
