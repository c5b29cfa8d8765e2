//! Provenance tracking - where a domain's knowledge came from

/// A provenance record of a domain
///
/// Sources are listed alongside a domain's graph but are not connected
/// to it; no relationship points at a source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Source {
    /// Identifier, unique within a domain
    pub id: String,

    /// Title of the referenced work
    pub title: String,

    /// Location of the referenced work
    pub url: String,

    /// Free-form trust label (e.g. "high", "peer-reviewed")
    pub trust: String,
}

impl Source {
    /// Create a new source record
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: String::new(),
            trust: String::new(),
        }
    }

    /// Set the url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the trust label
    pub fn with_trust(mut self, trust: impl Into<String>) -> Self {
        self.trust = trust.into();
        self
    }
}
