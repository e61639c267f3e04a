//! # Cookbook Model
//!
//! Domain types shared by every cookbook crate.
//!
//! A **Cookbook** is the tenant: it scopes guides, posts and tags, and maps
//! users to roles. A **Guide** is a multi-section authored document whose
//! section order is the document's reading order. A **Post** is one item of
//! the chronological feed.
//!
//! The serialized `Guide` shape
//! `{ title, character, tags, sections: [{ id, title, body, tags }, ...] }`
//! is the durable contract with the backing store; everything else here is
//! in-memory only.

mod character;
mod cookbook;
mod guide;
mod post;
mod tag;
mod template;

pub use character::Character;
pub use cookbook::{Cookbook, EditorContext, Role, UserId};
pub use guide::{Guide, GuideId, NewGuide, Section, SectionId};
pub use post::Post;
pub use tag::Tag;
pub use template::section_template;
