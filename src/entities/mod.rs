// src/entities/mod.rs
// =============================================================================
// The content model: books hold chapters and pages, chapters hold pages,
// pages carry revisions and attachments.
//
// These are plain data types. Relationship lookups (which revisions belong to
// a page, which chapter holds it) live on the content store, because they
// need the rest of the data set.
// =============================================================================

mod attachment;
mod book;
mod chapter;
mod page;
mod revision;
mod user;

pub use attachment::Attachment;
pub use book::Book;
pub use chapter::{Chapter, ChapterNode, ContentNode};
pub use page::{Page, PageRef, Tag};
pub use revision::{PageRevision, RevisionType};
pub use user::{Role, User};

#[cfg(test)]
pub(crate) use page::test_page;

/// PHP-style `urlencode`: spaces become '+', everything outside
/// `[A-Za-z0-9-_.*]` is percent-encoded.
pub fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_slug() {
        assert_eq!(urlencode("getting-started"), "getting-started");
        assert_eq!(urlencode("a b/c"), "a+b%2Fc");
    }
}
