//! Bearer-credential bridge to the identity provider

use async_trait::async_trait;

use crate::StoreError;

/// Token authorizing write calls against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Supplies the credential used to authorize updates.
///
/// Fails with [`StoreError::Auth`] in anonymous/viewer mode; the editor
/// aborts the save before anything reaches the write path.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn credential(&self) -> Result<Credential, StoreError>;
}

/// Fixed identity: a known token, or anonymous.
pub struct StaticIdentity {
    token: Option<String>,
}

impl StaticIdentity {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn credential(&self) -> Result<Credential, StoreError> {
        match &self.token {
            Some(token) => Ok(Credential::new(token.clone())),
            None => Err(StoreError::Auth("not signed in".to_string())),
        }
    }
}
