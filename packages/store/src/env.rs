//! Deployment environment for the REST backend

/// Base-URL selection, local vs production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    pub base_url: String,
    pub is_local: bool,
}

impl Env {
    pub fn local() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            is_local: true,
        }
    }

    pub fn production() -> Self {
        Self {
            base_url: "https://cookbook.gg".to_string(),
            is_local: false,
        }
    }

    /// Reads `COOKBOOK_ENV`; anything other than `development` means
    /// production.
    pub fn from_env() -> Self {
        match std::env::var("COOKBOOK_ENV").as_deref() {
            Ok("development") => Self::local(),
            _ => Self::production(),
        }
    }
}
