//! # Cookbook Store
//!
//! Contracts between the editing core and everything on the other side of
//! the network, plus the two backends shipped with the workspace.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: draft mutations + save/cancel       │
//! └─────────────────────────────────────────────┘
//!          ↓ GuideStore / IdentityProvider / NotificationSink
//! ┌─────────────────────────────────────────────┐
//! │ store: trait seams + error taxonomy         │
//! │  - MemoryStore: in-process, failure toggles │
//! │  - RestStore: cookbook REST routes          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything behind these traits is replaceable: tests run against
//! [`MemoryStore`], deployments run against [`RestStore`], and the editor
//! cannot tell the difference.

mod env;
mod error;
mod feed;
mod guide_store;
mod identity;
mod memory;
mod notify;
mod rest;

pub use env::Env;
pub use error::StoreError;
pub use feed::{FeedPage, FeedQuery, FeedSort, PostFeed};
pub use guide_store::GuideStore;
pub use identity::{Credential, IdentityProvider, StaticIdentity};
pub use memory::MemoryStore;
pub use notify::{Notification, NotificationSink, NotifyKind, RecordingSink, TracingSink};
pub use rest::RestStore;
