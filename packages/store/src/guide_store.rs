//! Guide persistence contract

use async_trait::async_trait;
use cookbook_model::{Guide, GuideId, NewGuide, Section};

use crate::{Credential, StoreError};

/// Document store for guides, scoped to one cookbook.
///
/// `update_sections` replaces the **entire** ordered section sequence; the
/// editor never sends diffs. The returned guide is the newly persisted
/// state, with store-assigned ids on sections that were saved for the first
/// time.
#[async_trait]
pub trait GuideStore: Send + Sync {
    async fn fetch(&self, guide: &GuideId) -> Result<Guide, StoreError>;

    async fn update_sections(
        &self,
        guide: &GuideId,
        sections: &[Section],
        credential: &Credential,
    ) -> Result<Guide, StoreError>;

    async fn list(&self) -> Result<Vec<Guide>, StoreError>;

    async fn create(
        &self,
        guide: NewGuide,
        credential: &Credential,
    ) -> Result<Guide, StoreError>;

    async fn delete(
        &self,
        guide: &GuideId,
        credential: &Credential,
    ) -> Result<(), StoreError>;
}
