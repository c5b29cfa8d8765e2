//! Relationship module - directed, typed edges between entity ids

/// A directed edge between two entities, referenced by id
///
/// Endpoints are plain ids, not resolved pointers. They need not match any
/// loaded entity; dangling references are tolerated everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Relationship {
    /// Source entity id
    pub source: String,

    /// Target entity id
    pub target: String,

    /// Free-form relationship type (e.g. "enables", "part_of")
    pub relationship_type: String,

    /// Free-form description
    pub description: String,
}

/// Identity of a relationship for de-duplication: (source, target, type)
///
/// Kept as a typed triple so that ids containing separator characters
/// can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipKey {
    /// Source entity id
    pub source: String,
    /// Target entity id
    pub target: String,
    /// Relationship type
    pub relationship_type: String,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship_type: relationship_type.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The de-duplication key of this relationship
    pub fn key(&self) -> RelationshipKey {
        RelationshipKey {
            source: self.source.clone(),
            target: self.target.clone(),
            relationship_type: self.relationship_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_description() {
        let a = Relationship::new("x", "y", "knows").with_description("one");
        let b = Relationship::new("x", "y", "knows").with_description("two");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_is_directional_and_typed() {
        let forward = Relationship::new("x", "y", "knows");
        let backward = Relationship::new("y", "x", "knows");
        let other_type = Relationship::new("x", "y", "likes");
        assert_ne!(forward.key(), backward.key());
        assert_ne!(forward.key(), other_type.key());
    }

    #[test]
    fn test_key_does_not_collide_on_separators() {
        // "a->b" / "c" and "a" / "b:c" would collide under naive string joining
        let a = Relationship::new("a->b", "c", "t");
        let b = Relationship::new("a", "b->c", "t");
        assert_ne!(a.key(), b.key());
    }
}
