use crate::{Section, SectionId};

const PLACEHOLDER_TITLE: &str = "**replace with title";

const SAMPLE_BODY: &str = "
  place both on their own lines with a full line of space on top and bottom
 ## gif template
    gif:gifUrl
 ## video template
    vid:youtube/clipUrl
 ";

/// Blank section prepended by the editor's add operation.
///
/// The id stays empty until the store assigns one on save.
pub fn section_template() -> Section {
    Section {
        id: SectionId::unsaved(),
        title: PLACEHOLDER_TITLE.to_string(),
        body: SAMPLE_BODY.to_string(),
        tags: Vec::new(),
    }
}
