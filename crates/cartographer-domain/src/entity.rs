//! Entity module - the nodes of the knowledge graph

/// A node of the knowledge graph
///
/// Entity ids are assumed unique within a domain but this is not enforced;
/// merging keeps the first occurrence of an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entity {
    /// Identifier, referenced by relationship endpoints
    pub id: String,

    /// Human-readable display name
    pub name: String,

    /// Free-form type tag (e.g. "concept", "person")
    pub entity_type: String,

    /// Free-form description
    pub description: String,
}

impl Entity {
    /// Create a new entity with an id and a display name
    ///
    /// # Examples
    ///
    /// ```
    /// use cartographer_domain::Entity;
    ///
    /// let entity = Entity::new("qubit", "Qubit").with_type("concept");
    /// assert_eq!(entity.id, "qubit");
    /// assert_eq!(entity.entity_type, "concept");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type: String::new(),
            description: String::new(),
        }
    }

    /// Set the type tag
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = entity_type.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name to show for this entity, falling back to the id when unnamed
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
