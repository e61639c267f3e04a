use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Character, Tag};

/// One item of the chronological feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub character: Option<Character>,
    pub created_at: DateTime<Utc>,
}
