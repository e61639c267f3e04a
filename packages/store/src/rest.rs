//! REST-backed guide store.
//!
//! Routes mirror the cookbook API:
//! `{base}/api/v1/cookbooks/{cookbook}/guides[/{guide}]`. Writes carry the
//! bearer credential in the `Authorization` header; reads are anonymous.

use async_trait::async_trait;
use cookbook_model::{Guide, GuideId, NewGuide, Section};
use reqwest::StatusCode;
use serde::Serialize;

use crate::{Credential, Env, GuideStore, StoreError};

pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    cookbook: String,
}

#[derive(Serialize)]
struct SectionsUpdate<'a> {
    sections: &'a [Section],
}

impl RestStore {
    pub fn new(env: &Env, cookbook: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: env.base_url.clone(),
            cookbook: cookbook.into(),
        }
    }

    fn guides_route(&self) -> String {
        format!(
            "{}/api/v1/cookbooks/{}/guides",
            self.base_url, self.cookbook
        )
    }

    fn guide_route(&self, guide: &GuideId) -> String {
        format!("{}/{}", self.guides_route(), guide.as_str())
    }

    fn status_error(status: StatusCode) -> StoreError {
        match status {
            StatusCode::NOT_FOUND => StoreError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                StoreError::Auth(format!("rejected with {status}"))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                StoreError::Validation(format!("rejected with {status}"))
            }
            other => StoreError::Transport(format!("unexpected status {other}")),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

#[async_trait]
impl GuideStore for RestStore {
    #[tracing::instrument(skip(self), fields(guide = guide.as_str()))]
    async fn fetch(&self, guide: &GuideId) -> Result<Guide, StoreError> {
        let response = self
            .client
            .get(self.guide_route(guide))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self, sections, credential), fields(guide = guide.as_str()))]
    async fn update_sections(
        &self,
        guide: &GuideId,
        sections: &[Section],
        credential: &Credential,
    ) -> Result<Guide, StoreError> {
        let response = self
            .client
            .put(self.guide_route(guide))
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .json(&SectionsUpdate { sections })
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn list(&self) -> Result<Vec<Guide>, StoreError> {
        let response = self
            .client
            .get(self.guides_route())
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn create(
        &self,
        guide: NewGuide,
        credential: &Credential,
    ) -> Result<Guide, StoreError> {
        let response = self
            .client
            .post(self.guides_route())
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .json(&guide)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn delete(
        &self,
        guide: &GuideId,
        credential: &Credential,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.guide_route(guide))
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status))
        }
    }
}
