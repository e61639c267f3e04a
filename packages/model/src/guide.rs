//! Guide aggregate: ordered sections under a single document root.

use serde::{Deserialize, Serialize};

use crate::{Character, Tag};

/// Identifier of a persisted guide document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideId(pub String);

impl GuideId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a persisted section.
///
/// Empty until the backing store assigns one, so a freshly added section
/// carries `SectionId::unsaved()` until the next successful save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unsaved() -> Self {
        Self(String::new())
    }

    pub fn is_unsaved(&self) -> bool {
        self.0.is_empty()
    }
}

/// One page-unit of a guide.
///
/// `body` is markdown and may embed media through the inline mini-syntax
/// (`gif:<url>`, `vid:<url>`); the core treats it as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: SectionId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// The aggregate root.
///
/// `sections` is authored order. Nothing in this workspace ever sorts it;
/// reordering happens only through the editor's explicit move operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default)]
    pub id: GuideId,
    pub title: String,
    pub character: Option<Character>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Payload for creating a guide (the create flow assigns the id server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuide {
    pub title: String,
    pub character: Option<Character>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_document_shape_is_stable() {
        let guide = Guide {
            id: GuideId::new("g1"),
            title: "falco".to_string(),
            character: None,
            tags: vec![],
            sections: vec![Section {
                id: SectionId::new("s1"),
                title: "basics".to_string(),
                body: "gif:https://example.test/a.gif".to_string(),
                tags: vec![],
            }],
        };

        let value = serde_json::to_value(&guide).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["title", "character", "tags", "sections"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }

        let section = value["sections"][0].as_object().unwrap();
        for key in ["id", "title", "body", "tags"] {
            assert!(section.contains_key(key), "missing section key {key}");
        }
    }

    #[test]
    fn sections_round_trip_in_order() {
        let guide = Guide {
            id: GuideId::new("g1"),
            title: "ordering".to_string(),
            character: None,
            tags: vec![],
            sections: ["a", "b", "c"]
                .iter()
                .map(|t| Section {
                    id: SectionId::unsaved(),
                    title: (*t).to_string(),
                    body: String::new(),
                    tags: vec![],
                })
                .collect(),
        };

        let json = serde_json::to_string(&guide).unwrap();
        let back: Guide = serde_json::from_str(&json).unwrap();

        let titles: Vec<&str> = back.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn unsaved_section_id_is_empty() {
        assert!(SectionId::unsaved().is_unsaved());
        assert!(!SectionId::new("abc").is_unsaved());
    }
}
