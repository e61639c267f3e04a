//! Paginated post feed contract.
//!
//! The concrete network layer for the feed lives outside this workspace;
//! only the interface it must satisfy is fixed here, plus the in-process
//! implementation [`crate::MemoryStore`] provides for tests and local use.

use async_trait::async_trait;
use cookbook_model::Post;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Sort order of the feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSort {
    /// Newest first, by creation date
    #[default]
    Newest,
}

/// One page request against the feed.
///
/// `page` is 1-based; `filters` holds tag ids a post must carry at least one
/// of; `search` matches case-insensitively on title and body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedQuery {
    pub sort: FeedSort,
    pub limit: usize,
    pub page: usize,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl FeedQuery {
    pub fn first_page(limit: usize) -> Self {
        Self {
            sort: FeedSort::Newest,
            limit,
            page: 1,
            filters: Vec::new(),
            search: None,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    /// False once the caller has seen the last matching post; drives the
    /// infinite-scroll cutoff.
    pub has_more: bool,
}

#[async_trait]
pub trait PostFeed: Send + Sync {
    async fn page(&self, query: &FeedQuery) -> Result<FeedPage, StoreError>;
}
