//! On-disk archive layout
//!
//! ```text
//! <base>/indexes/topics-index.json
//! <base>/indexes/metadata.json
//! <base>/topics/<domain_id>/entities.json
//! <base>/topics/<domain_id>/relationships.json
//! <base>/topics/<domain_id>/sources.json
//! ```

use cartographer_domain::DocumentKind;
use std::path::{Path, PathBuf};

/// Resolves archive file paths from a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    base: PathBuf,
}

impl ArchiveLayout {
    /// Create a layout rooted at `base`
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Archive root
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the topic index
    pub fn topics_index(&self) -> PathBuf {
        self.base.join("indexes").join("topics-index.json")
    }

    /// Path of the archive metadata
    pub fn metadata(&self) -> PathBuf {
        self.base.join("indexes").join("metadata.json")
    }

    /// Directory of one domain, `None` if the id cannot name a single directory
    pub fn domain_dir(&self, domain_id: &str) -> Option<PathBuf> {
        if is_valid_domain_id(domain_id) {
            Some(self.base.join("topics").join(domain_id))
        } else {
            None
        }
    }

    /// Path of one document of a domain
    pub fn document(&self, domain_id: &str, document: DocumentKind) -> Option<PathBuf> {
        self.domain_dir(domain_id)
            .map(|dir| dir.join(document.file_name()))
    }
}

/// A domain id must be a single, non-special path component
fn is_valid_domain_id(domain_id: &str) -> bool {
    !domain_id.is_empty()
        && domain_id != "."
        && domain_id != ".."
        && !domain_id.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = ArchiveLayout::new("/archive");
        assert_eq!(
            layout.topics_index(),
            PathBuf::from("/archive/indexes/topics-index.json")
        );
        assert_eq!(layout.metadata(), PathBuf::from("/archive/indexes/metadata.json"));
        assert_eq!(
            layout.document("physics", DocumentKind::Relationships),
            Some(PathBuf::from("/archive/topics/physics/relationships.json"))
        );
    }

    #[test]
    fn test_rejects_escaping_ids() {
        let layout = ArchiveLayout::new("/archive");
        for id in ["", ".", "..", "../etc", "a/b", "a\\b"] {
            assert!(layout.domain_dir(id).is_none(), "id {:?} should be rejected", id);
        }
        assert!(layout.domain_dir("quantum-computing").is_some());
    }
}
