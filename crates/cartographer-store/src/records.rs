//! JSON record shapes of the archive documents
//!
//! Every field is optional on read; missing or null strings become empty.
//! Numbers and booleans in text fields are kept as their JSON text.

use cartographer_domain::{ArchiveMetadata, Entity, Relationship, Source, Topic};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn stringify(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(stringify)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TopicRecord {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    title: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
}

impl From<TopicRecord> for Topic {
    fn from(r: TopicRecord) -> Self {
        Topic {
            id: r.id,
            title: r.title,
            description: r.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MetadataRecord {
    #[serde(deserialize_with = "lenient_string")]
    created: String,
    domains: Vec<String>,
}

impl From<MetadataRecord> for ArchiveMetadata {
    fn from(r: MetadataRecord) -> Self {
        ArchiveMetadata {
            created: r.created,
            domains: r.domains,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EntityRecord {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    name: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    entity_type: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
}

impl From<EntityRecord> for Entity {
    fn from(r: EntityRecord) -> Self {
        Entity {
            id: r.id,
            name: r.name,
            entity_type: r.entity_type,
            description: r.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RelationshipRecord {
    #[serde(deserialize_with = "lenient_string")]
    source: String,
    #[serde(deserialize_with = "lenient_string")]
    target: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    relationship_type: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
}

impl From<RelationshipRecord> for Relationship {
    fn from(r: RelationshipRecord) -> Self {
        Relationship {
            source: r.source,
            target: r.target,
            relationship_type: r.relationship_type,
            description: r.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SourceRecord {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    title: String,
    #[serde(deserialize_with = "lenient_string")]
    url: String,
    #[serde(deserialize_with = "lenient_string")]
    trust: String,
}

impl From<SourceRecord> for Source {
    fn from(r: SourceRecord) -> Self {
        Source {
            id: r.id,
            title: r.title,
            url: r.url,
            trust: r.trust,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_field_is_renamed() {
        let record: EntityRecord =
            serde_json::from_str(r#"{"id":"q","name":"Qubit","type":"concept"}"#).unwrap();
        let entity = Entity::from(record);
        assert_eq!(entity.entity_type, "concept");
        assert_eq!(entity.description, "");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: RelationshipRecord = serde_json::from_str(r#"{"source":"a"}"#).unwrap();
        let relationship = Relationship::from(record);
        assert_eq!(relationship.source, "a");
        assert_eq!(relationship.target, "");
        assert_eq!(relationship.relationship_type, "");
    }

    #[test]
    fn test_metadata_created_accepts_numbers() {
        let record: MetadataRecord =
            serde_json::from_str(r#"{"created":1700000000,"domains":["a"]}"#).unwrap();
        let metadata = ArchiveMetadata::from(record);
        assert_eq!(metadata.created, "1700000000");
        assert_eq!(metadata.domains, ["a"]);
    }

    #[test]
    fn test_scalar_fields_are_read_as_text() {
        let record: EntityRecord =
            serde_json::from_str(r#"{"id": 5, "name": true, "description": null}"#).unwrap();
        let entity = Entity::from(record);
        assert_eq!(entity.id, "5");
        assert_eq!(entity.name, "true");
        assert_eq!(entity.description, "");
    }

    #[test]
    fn test_record_must_be_an_object() {
        let result: Result<SourceRecord, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }
}
