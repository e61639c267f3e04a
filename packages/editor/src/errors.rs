//! Error types for the editor

use thiserror::Error;

use crate::edits::EditError;
use cookbook_store::StoreError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("edit error: {0}")]
    Edit(#[from] EditError),

    #[error("no guide is loaded")]
    NoGuide,

    #[error("not in edit mode")]
    NotEditing,

    #[error("editing requires admin capability over the cookbook")]
    NotPermitted,

    #[error("every section needs a title before saving")]
    EmptyTitle,
}
