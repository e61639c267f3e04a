//! In-process store backend.
//!
//! Backs the integration tests and local fixtures. Interior state lives
//! behind `tokio::sync::Mutex` so the same instance can be shared between an
//! editor and the test asserting against it; per-operation failure toggles
//! let tests exercise the transport-error paths without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use cookbook_model::{Guide, GuideId, NewGuide, Post, Section, SectionId};
use tokio::sync::Mutex;

use crate::{Credential, FeedPage, FeedQuery, GuideStore, PostFeed, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    guides: Mutex<HashMap<GuideId, Guide>>,
    posts: Mutex<Vec<Post>>,
    next_id: AtomicU64,
    fail_next_fetch: AtomicBool,
    fail_next_update: AtomicBool,
    pub fetch_calls: AtomicU64,
    pub update_calls: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_guide(&self, guide: Guide) {
        self.guides.lock().await.insert(guide.id.clone(), guide);
    }

    pub async fn insert_posts(&self, posts: Vec<Post>) {
        self.posts.lock().await.extend(posts);
    }

    /// Make the next `fetch` fail with a transport error
    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    /// Make the next `update_sections` fail with a transport error
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("doc-{n}")
    }

    fn take(flag: &AtomicBool) -> bool {
        flag.swap(false, Ordering::SeqCst)
    }
}

#[async_trait]
impl GuideStore for MemoryStore {
    async fn fetch(&self, guide: &GuideId) -> Result<Guide, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if Self::take(&self.fail_next_fetch) {
            return Err(StoreError::Transport("injected fetch failure".to_string()));
        }
        self.guides
            .lock()
            .await
            .get(guide)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_sections(
        &self,
        guide: &GuideId,
        sections: &[Section],
        _credential: &Credential,
    ) -> Result<Guide, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if Self::take(&self.fail_next_update) {
            return Err(StoreError::Transport("injected update failure".to_string()));
        }

        let mut guides = self.guides.lock().await;
        let stored = guides.get_mut(guide).ok_or(StoreError::NotFound)?;

        // Whole-sequence replacement; unsaved sections get ids here.
        stored.sections = sections
            .iter()
            .cloned()
            .map(|mut section| {
                if section.id.is_unsaved() {
                    section.id = SectionId::new(self.assign_id());
                }
                section
            })
            .collect();

        Ok(stored.clone())
    }

    async fn list(&self) -> Result<Vec<Guide>, StoreError> {
        Ok(self.guides.lock().await.values().cloned().collect())
    }

    async fn create(
        &self,
        guide: NewGuide,
        _credential: &Credential,
    ) -> Result<Guide, StoreError> {
        let created = Guide {
            id: GuideId::new(self.assign_id()),
            title: guide.title,
            character: guide.character,
            tags: guide.tags,
            sections: Vec::new(),
        };
        self.guides
            .lock()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn delete(
        &self,
        guide: &GuideId,
        _credential: &Credential,
    ) -> Result<(), StoreError> {
        self.guides
            .lock()
            .await
            .remove(guide)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl PostFeed for MemoryStore {
    async fn page(&self, query: &FeedQuery) -> Result<FeedPage, StoreError> {
        let posts = self.posts.lock().await;

        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|post| {
                if !query.filters.is_empty()
                    && !post.tags.iter().any(|t| query.filters.contains(&t.id))
                {
                    return false;
                }
                match &query.search {
                    Some(needle) => {
                        let needle = needle.to_lowercase();
                        post.title.to_lowercase().contains(&needle)
                            || post.body.to_lowercase().contains(&needle)
                    }
                    None => true,
                }
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = query.page.saturating_sub(1) * query.limit;
        let page: Vec<Post> = matching.iter().skip(offset).take(query.limit).cloned().collect();
        let has_more = offset + page.len() < matching.len();

        Ok(FeedPage { posts: page, has_more })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use cookbook_model::Tag;

    fn guide(id: &str, titles: &[&str]) -> Guide {
        Guide {
            id: GuideId::new(id),
            title: "falco".to_string(),
            character: None,
            tags: vec![],
            sections: titles
                .iter()
                .map(|t| Section {
                    id: SectionId::new(format!("{id}-{t}")),
                    title: (*t).to_string(),
                    body: String::new(),
                    tags: vec![],
                })
                .collect(),
        }
    }

    fn post(id: &str, title: &str, tag: Option<&str>, age_minutes: i64) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            body: format!("{title} body"),
            tags: tag.map(|t| vec![Tag::new(t, t)]).unwrap_or_default(),
            character: None,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn fetch_unknown_guide_is_not_found() {
        let store = MemoryStore::new();
        let err = store.fetch(&GuideId::new("missing")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn update_assigns_ids_to_unsaved_sections() {
        let store = MemoryStore::new();
        store.insert_guide(guide("g1", &["a"])).await;

        let sections = vec![
            Section {
                id: SectionId::unsaved(),
                title: "new".to_string(),
                body: String::new(),
                tags: vec![],
            },
            Section {
                id: SectionId::new("g1-a"),
                title: "a".to_string(),
                body: String::new(),
                tags: vec![],
            },
        ];

        let saved = store
            .update_sections(&GuideId::new("g1"), &sections, &Credential::new("t"))
            .await
            .unwrap();

        assert!(!saved.sections[0].id.is_unsaved());
        assert_eq!(saved.sections[1].id, SectionId::new("g1-a"));
        // Order is exactly what the caller sent.
        let titles: Vec<&str> = saved.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "a"]);
    }

    #[tokio::test]
    async fn injected_failure_hits_once_then_clears() {
        let store = MemoryStore::new();
        store.insert_guide(guide("g1", &["a"])).await;
        store.fail_next_update();

        let sections = guide("g1", &["a"]).sections;
        let credential = Credential::new("t");
        let id = GuideId::new("g1");

        assert!(matches!(
            store.update_sections(&id, &sections, &credential).await,
            Err(StoreError::Transport(_))
        ));
        assert!(store.update_sections(&id, &sections, &credential).await.is_ok());
        assert_eq!(store.update_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn full_page_reports_more() {
        let store = MemoryStore::new();
        store
            .insert_posts((0..4).map(|i| post(&format!("p{i}"), "combo", None, i)).collect())
            .await;

        let first = store.page(&FeedQuery::first_page(3)).await.unwrap();
        assert_eq!(first.posts.len(), 3);
        assert!(first.has_more);

        let mut next = FeedQuery::first_page(3);
        next.page = 2;
        let second = store.page(&next).await.unwrap();
        assert_eq!(second.posts.len(), 1);
        assert!(!second.has_more);
    }

    #[tokio::test]
    async fn feed_is_newest_first_and_filterable() {
        let store = MemoryStore::new();
        store
            .insert_posts(vec![
                post("p1", "edgeguards", Some("tech"), 30),
                post("p2", "ledgedash", Some("tech"), 10),
                post("p3", "bracket recap", Some("news"), 20),
            ])
            .await;

        let mut query = FeedQuery::first_page(10);
        query.filters = vec!["tech".to_string()];
        let page = store.page(&query).await.unwrap();

        let ids: Vec<&str> = page.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);

        let mut search = FeedQuery::first_page(10);
        search.search = Some("RECAP".to_string());
        let found = store.page(&search).await.unwrap();
        assert_eq!(found.posts.len(), 1);
        assert_eq!(found.posts[0].id, "p3");
    }
}
