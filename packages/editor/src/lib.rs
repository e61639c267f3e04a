//! # Cookbook Editor
//!
//! Section list editing core for cookbook guides.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ frontend: draggable rows, toasts, markdown  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: edit session + draft mutations      │
//! │  - Viewing ↔ Editing state machine          │
//! │  - add / delete / update / reorder edits    │
//! │  - lockstep section + collapse sequences    │
//! │  - all-or-nothing save, reload on cancel    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: GuideStore / Identity / Notification │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The draft is the only mutable copy**: the last published guide is
//!    never aliased or edited in place.
//! 2. **Sections and collapse flags move together**: every structural edit
//!    applies to both sequences at the same index, so
//!    `collapsed.len() == sections.len()` holds after every operation.
//! 3. **Save sends the whole sequence**: never a diff; the reloaded guide
//!    becomes the new published state.
//! 4. **Failures keep the draft**: a failed save leaves the session in
//!    `Editing` with the working copy untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cookbook_editor::GuideEditor;
//!
//! let mut editor = GuideEditor::new(context, guide_id, store, identity, sink);
//! editor.load().await?;
//! editor.begin_editing()?;
//! editor.add_section()?;
//! editor.reorder(0, 2)?;
//! editor.save().await?;
//! ```

mod edits;
mod errors;
mod reorder;
mod session;

pub use edits::{Draft, EditError, FieldEdit, SectionEdit};
pub use errors::EditorError;
pub use reorder::reorder_move;
pub use session::{EditorState, GuideEditor, SectionRow};
