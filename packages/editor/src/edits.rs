//! # Draft Edits
//!
//! Intent-preserving operations on the working copy of a guide.
//!
//! ## Design Principles
//!
//! 1. **Draft-only**: edits touch the working copy, never the published
//!    guide and never the backend.
//! 2. **Validated**: every edit checks its indices before applying.
//! 3. **Lockstep**: structural edits (add, delete, move) splice the section
//!    sequence and the collapse sequence at the same position, so a
//!    section's collapsed appearance travels with it.
//!
//! ## Edit Semantics
//!
//! ### Add
//! - Prepends the blank section template, expanded
//! - Prepend-only; inserting at an arbitrary index is not supported
//!
//! ### Delete
//! - Splices section and collapse flag at the same index
//! - Relative order of everything else is preserved
//!
//! ### Move
//! - Single-element relocation (remove + reinsert), not a swap
//! - Applied identically to both sequences

use cookbook_model::{section_template, Guide, Tag};
use thiserror::Error;

use crate::reorder::reorder_move;

/// Working copy of a guide plus its per-section collapse flags.
///
/// The two sequences are index-aligned: `collapsed[i]` belongs to
/// `guide.sections[i]`. `false` means expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub guide: Guide,
    pub collapsed: Vec<bool>,
}

impl Draft {
    /// Starts a draft from the published guide, all sections expanded.
    pub fn from_published(guide: Guide) -> Self {
        let collapsed = vec![false; guide.sections.len()];
        Self { guide, collapsed }
    }

    pub fn len(&self) -> usize {
        self.guide.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guide.sections.is_empty()
    }

    /// Holds after every edit; checked by the session in debug builds.
    pub fn is_aligned(&self) -> bool {
        self.collapsed.len() == self.guide.sections.len()
    }
}

/// Replacement value for one editable section field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Body(String),
    Tags(Vec<Tag>),
}

/// Edits the session can apply to a draft
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEdit {
    /// Prepend the blank section template
    Add,

    /// Remove the section and its collapse flag at `index`
    Delete { index: usize },

    /// Replace one field of the section at `index` in place
    UpdateField { index: usize, value: FieldEdit },

    /// Flip the collapse flag at `index`; sections are untouched
    ToggleCollapse { index: usize },

    /// Move the section at `from` to `to`, collapse flag in lockstep
    Move { from: usize, to: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("index {index} out of bounds for {len} sections")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SectionEdit {
    /// Validate without applying
    pub fn validate(&self, draft: &Draft) -> Result<(), EditError> {
        let len = draft.len();
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(EditError::IndexOutOfBounds { index, len })
            }
        };

        match self {
            SectionEdit::Add => Ok(()),
            SectionEdit::Delete { index }
            | SectionEdit::UpdateField { index, .. }
            | SectionEdit::ToggleCollapse { index } => check(*index),
            SectionEdit::Move { from, to } => {
                check(*from)?;
                check(*to)
            }
        }
    }

    /// Apply to the draft with validation
    pub fn apply(&self, draft: &mut Draft) -> Result<(), EditError> {
        self.validate(draft)?;

        match self {
            SectionEdit::Add => {
                draft.guide.sections.insert(0, section_template());
                draft.collapsed.insert(0, false);
            }

            SectionEdit::Delete { index } => {
                draft.guide.sections.remove(*index);
                draft.collapsed.remove(*index);
            }

            SectionEdit::UpdateField { index, value } => {
                let section = &mut draft.guide.sections[*index];
                match value {
                    FieldEdit::Title(title) => section.title = title.clone(),
                    FieldEdit::Body(body) => section.body = body.clone(),
                    FieldEdit::Tags(tags) => section.tags = tags.clone(),
                }
            }

            SectionEdit::ToggleCollapse { index } => {
                draft.collapsed[*index] = !draft.collapsed[*index];
            }

            SectionEdit::Move { from, to } => {
                reorder_move(&mut draft.guide.sections, *from, *to);
                reorder_move(&mut draft.collapsed, *from, *to);
            }
        }

        debug_assert!(draft.is_aligned());
        Ok(())
    }
}
