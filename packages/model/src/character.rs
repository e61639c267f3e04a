use serde::{Deserialize, Serialize};

/// Character a guide or post is associated with.
///
/// The icon slug resolves against the frontend's character sprite set; the
/// core only carries it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Character {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }
}
