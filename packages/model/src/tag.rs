use serde::{Deserialize, Serialize};

/// Tag reference attached to guides, sections and posts.
///
/// Tags are set-valued everywhere they appear; their order carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
