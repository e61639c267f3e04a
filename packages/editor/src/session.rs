//! # Edit Session
//!
//! Owns the working copy of one guide and mediates every mutation between
//! an explicit save (commits the whole section sequence) and an explicit
//! cancel (reloads the last persisted state).
//!
//! Two states, `Viewing` and `Editing`, plus the transient `Saving`
//! sub-state while the save round-trip is in flight. The machine cycles for
//! the life of the view; there is no terminal state.
//!
//! Single-threaded and event-driven: async calls suspend only the operation
//! that issued them. There is deliberately no in-flight mutex — overlapping
//! saves are an accepted last-writer-wins race decided by completion order —
//! and no cancellation or timeout layer beyond the transport's own.

use std::sync::Arc;

use cookbook_model::{EditorContext, Guide, GuideId, Section};
use cookbook_store::{GuideStore, IdentityProvider, NotificationSink, NotifyKind};

use crate::edits::{Draft, FieldEdit, SectionEdit};
use crate::errors::EditorError;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing,
    /// Save round-trip in flight; returns to `Editing` on failure,
    /// `Viewing` on success.
    Saving,
}

/// One row of the rendering contract: draggable only while editing,
/// collapse controls body visibility only, never existence.
#[derive(Debug)]
pub struct SectionRow<'a> {
    pub index: usize,
    pub section: &'a Section,
    pub collapsed: bool,
    pub draggable: bool,
}

/// Section list editor for a single guide.
///
/// The published snapshot is never mutated in place; edits go to the draft
/// and only a successful save publishes a new snapshot.
pub struct GuideEditor<S, I, N> {
    context: EditorContext,
    guide_id: GuideId,
    store: Arc<S>,
    identity: Arc<I>,
    notifier: Arc<N>,
    state: EditorState,
    published: Option<Guide>,
    draft: Option<Draft>,
}

impl<S, I, N> GuideEditor<S, I, N>
where
    S: GuideStore,
    I: IdentityProvider,
    N: NotificationSink,
{
    pub fn new(
        context: EditorContext,
        guide_id: GuideId,
        store: Arc<S>,
        identity: Arc<I>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            context,
            guide_id,
            store,
            identity,
            notifier,
            state: EditorState::Viewing,
            published: None,
            draft: None,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Last persisted snapshot; `None` until a load succeeds, and the view
    /// renders nothing rather than a broken partial state.
    pub fn published(&self) -> Option<&Guide> {
        self.published.as_ref()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Loads the persisted guide on mount.
    #[tracing::instrument(skip(self), fields(guide = self.guide_id.as_str()))]
    pub async fn load(&mut self) -> Result<(), EditorError> {
        match self.store.fetch(&self.guide_id).await {
            Ok(guide) => {
                self.published = Some(guide);
                self.draft = None;
                self.state = EditorState::Viewing;
                Ok(())
            }
            Err(err) => {
                self.published = None;
                self.notifier
                    .notify(NotifyKind::Error, "Error getting guide", &err.to_string());
                Err(err.into())
            }
        }
    }

    /// `Viewing → Editing`; admin capability over the parent cookbook
    /// required, no data changes on entry.
    pub fn begin_editing(&mut self) -> Result<(), EditorError> {
        if !self.context.can_edit() {
            return Err(EditorError::NotPermitted);
        }
        let published = self.published.as_ref().ok_or(EditorError::NoGuide)?;
        if self.state == EditorState::Viewing {
            self.draft = Some(Draft::from_published(published.clone()));
            self.state = EditorState::Editing;
        }
        Ok(())
    }

    /// Prepends a blank template section, expanded.
    pub fn add_section(&mut self) -> Result<(), EditorError> {
        self.apply(SectionEdit::Add)
    }

    pub fn delete_section(&mut self, index: usize) -> Result<(), EditorError> {
        self.apply(SectionEdit::Delete { index })
    }

    pub fn update_field(&mut self, index: usize, value: FieldEdit) -> Result<(), EditorError> {
        self.apply(SectionEdit::UpdateField { index, value })
    }

    pub fn toggle_collapse(&mut self, index: usize) -> Result<(), EditorError> {
        self.apply(SectionEdit::ToggleCollapse { index })
    }

    /// Moves a section, its collapse flag travelling with it.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        self.apply(SectionEdit::Move { from, to })
    }

    fn apply(&mut self, edit: SectionEdit) -> Result<(), EditorError> {
        if self.state != EditorState::Editing {
            return Err(EditorError::NotEditing);
        }
        let draft = self.draft.as_mut().ok_or(EditorError::NotEditing)?;
        edit.apply(draft)?;
        Ok(())
    }

    /// Client-side gate that keeps empty titles from ever reaching the
    /// backend; the frontend disables the save action while this is false.
    pub fn can_save(&self) -> bool {
        match (&self.state, &self.draft) {
            (EditorState::Editing, Some(draft)) => draft
                .guide
                .sections
                .iter()
                .all(|s| !s.title.trim().is_empty()),
            _ => false,
        }
    }

    /// Commits the entire section sequence.
    ///
    /// On success the guide is reloaded from the store so the draft's
    /// unsaved sections pick up their server-assigned ids. On any failure
    /// the session stays in `Editing` with the draft untouched.
    #[tracing::instrument(skip(self), fields(guide = self.guide_id.as_str()))]
    pub async fn save(&mut self) -> Result<(), EditorError> {
        if self.state != EditorState::Editing || self.draft.is_none() {
            return Err(EditorError::NotEditing);
        }
        if !self.can_save() {
            return Err(EditorError::EmptyTitle);
        }
        self.state = EditorState::Saving;

        let credential = match self.identity.credential().await {
            Ok(credential) => credential,
            Err(err) => {
                self.notifier.notify(
                    NotifyKind::Error,
                    "Not signed in",
                    "Saving requires a signed-in admin",
                );
                self.state = EditorState::Editing;
                return Err(err.into());
            }
        };

        // The draft stays in place until the store confirms; a failed save
        // must not lose the user's edits.
        let sections: Vec<Section> = self
            .draft
            .as_ref()
            .map(|d| d.guide.sections.clone())
            .unwrap_or_default();

        match self
            .store
            .update_sections(&self.guide_id, &sections, &credential)
            .await
        {
            Ok(saved) => {
                self.notifier
                    .notify(NotifyKind::Success, "Guide saved!", "Guide saved");
                // Reload for server-assigned ids; fall back to the update
                // response if the reload itself fails.
                match self.store.fetch(&self.guide_id).await {
                    Ok(guide) => self.published = Some(guide),
                    Err(err) => {
                        tracing::warn!(error = %err, "reload after save failed");
                        self.published = Some(saved);
                    }
                }
                self.draft = None;
                self.state = EditorState::Viewing;
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(
                    NotifyKind::Error,
                    "Something went wrong",
                    "Guide was not saved",
                );
                self.state = EditorState::Editing;
                Err(err.into())
            }
        }
    }

    /// Discards the draft unconditionally and reloads the persisted guide.
    /// Never touches the write path.
    #[tracing::instrument(skip(self), fields(guide = self.guide_id.as_str()))]
    pub async fn cancel(&mut self) -> Result<(), EditorError> {
        if self.state == EditorState::Viewing {
            return Err(EditorError::NotEditing);
        }
        self.draft = None;
        self.state = EditorState::Viewing;

        match self.store.fetch(&self.guide_id).await {
            Ok(guide) => {
                self.published = Some(guide);
                Ok(())
            }
            Err(err) => {
                // Draft is already gone; the previous snapshot stays up.
                self.notifier
                    .notify(NotifyKind::Error, "Error getting guide", &err.to_string());
                Err(err.into())
            }
        }
    }

    /// Rendering contract: rows in authored order, draggable only while
    /// editing, collapse controlling body visibility only.
    pub fn sections_view(&self) -> Vec<SectionRow<'_>> {
        match (&self.state, &self.draft, &self.published) {
            (EditorState::Viewing, _, Some(guide)) => guide
                .sections
                .iter()
                .enumerate()
                .map(|(index, section)| SectionRow {
                    index,
                    section,
                    collapsed: false,
                    draggable: false,
                })
                .collect(),
            (_, Some(draft), _) => draft
                .guide
                .sections
                .iter()
                .enumerate()
                .map(|(index, section)| SectionRow {
                    index,
                    section,
                    collapsed: draft.collapsed[index],
                    draggable: self.state == EditorState::Editing,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_model::{Cookbook, Role, SectionId, UserId};
    use cookbook_store::{MemoryStore, RecordingSink, StaticIdentity};
    use std::collections::HashMap;

    fn admin_context() -> EditorContext {
        let mut roles = HashMap::new();
        roles.insert(UserId::new("u1"), Role::Admin);
        EditorContext::new(
            Cookbook {
                id: "cb1".to_string(),
                name: "melee".to_string(),
                roles,
                streams: vec![],
            },
            Some(UserId::new("u1")),
        )
    }

    fn viewer_context() -> EditorContext {
        EditorContext::new(
            Cookbook {
                id: "cb1".to_string(),
                name: "melee".to_string(),
                roles: HashMap::new(),
                streams: vec![],
            },
            Some(UserId::new("u1")),
        )
    }

    fn stored_guide() -> Guide {
        Guide {
            id: GuideId::new("g1"),
            title: "falco".to_string(),
            character: None,
            tags: vec![],
            sections: vec![Section {
                id: SectionId::new("s1"),
                title: "basics".to_string(),
                body: String::new(),
                tags: vec![],
            }],
        }
    }

    async fn editor_with(
        context: EditorContext,
    ) -> GuideEditor<MemoryStore, StaticIdentity, RecordingSink> {
        let store = Arc::new(MemoryStore::new());
        store.insert_guide(stored_guide()).await;
        GuideEditor::new(
            context,
            GuideId::new("g1"),
            store,
            Arc::new(StaticIdentity::signed_in("tok")),
            Arc::new(RecordingSink::new()),
        )
    }

    #[tokio::test]
    async fn viewer_cannot_enter_edit_mode() {
        let mut editor = editor_with(viewer_context()).await;
        editor.load().await.unwrap();
        assert_eq!(editor.begin_editing(), Err(EditorError::NotPermitted));
        assert_eq!(editor.state(), EditorState::Viewing);
    }

    #[tokio::test]
    async fn edits_require_edit_mode() {
        let mut editor = editor_with(admin_context()).await;
        editor.load().await.unwrap();
        assert_eq!(editor.add_section(), Err(EditorError::NotEditing));
        assert_eq!(editor.reorder(0, 0), Err(EditorError::NotEditing));
    }

    #[tokio::test]
    async fn begin_editing_needs_a_loaded_guide() {
        let mut editor = editor_with(admin_context()).await;
        assert_eq!(editor.begin_editing(), Err(EditorError::NoGuide));
    }

    #[tokio::test]
    async fn rows_are_draggable_only_while_editing() {
        let mut editor = editor_with(admin_context()).await;
        editor.load().await.unwrap();
        assert!(editor.sections_view().iter().all(|row| !row.draggable));

        editor.begin_editing().unwrap();
        assert!(editor.sections_view().iter().all(|row| row.draggable));
    }

    #[tokio::test]
    async fn empty_title_blocks_save() {
        let mut editor = editor_with(admin_context()).await;
        editor.load().await.unwrap();
        editor.begin_editing().unwrap();
        editor
            .update_field(0, FieldEdit::Title("  ".to_string()))
            .unwrap();
        assert!(!editor.can_save());
        assert_eq!(editor.save().await, Err(EditorError::EmptyTitle));
        assert_eq!(editor.state(), EditorState::Editing);
    }
}
