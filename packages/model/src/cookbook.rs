//! Cookbook tenant and the explicit editor context derived from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Capability a user holds over a cookbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

/// The top-level tenant scoping guides, posts and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookbook {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roles: HashMap<UserId, Role>,
    #[serde(default)]
    pub streams: Vec<String>,
}

impl Cookbook {
    pub fn role_of(&self, user: &UserId) -> Role {
        self.roles.get(user).copied().unwrap_or(Role::Viewer)
    }
}

/// Session context handed to the editor by reference at construction.
///
/// Replaces the ambient global store the frontend read `cookbook`/`user`
/// from; nothing in the core reaches for module-level state.
#[derive(Debug, Clone)]
pub struct EditorContext {
    pub cookbook: Cookbook,
    pub user: Option<UserId>,
}

impl EditorContext {
    pub fn new(cookbook: Cookbook, user: Option<UserId>) -> Self {
        Self { cookbook, user }
    }

    /// Only an admin over the parent cookbook may enter edit mode.
    pub fn can_edit(&self) -> bool {
        match &self.user {
            Some(user) => self.cookbook.role_of(user) == Role::Admin,
            None => false,
        }
    }
}
