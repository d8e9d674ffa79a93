// src/links/mod.rs
// =============================================================================
// Cross-page links inside rendered page HTML.
//
// Submodules:
// - scanner: finds the href of every <a> tag (regex or HTML parser)
// - like: SQL LIKE matching used for slug lookups
// - discover: which visible pages does a page link to?
// - export: flatten a book and turn page links into #page-<id> anchors
//
// The link operations never touch the database directly. They talk to a
// `VisiblePages` collaborator, which the content store implements for a given
// actor and tests implement with a plain Vec.
// =============================================================================

mod discover;
mod export;
mod like;
mod scanner;

pub use discover::{local_linked_pages, PageSet};
pub use export::{flatten, replace_links_for_export, ReplacementLog, WorkingEntry};
pub use like::like_matches;
pub use scanner::{slug_from_href, HtmlLinkScanner, LinkScanner, RegexLinkScanner, ScannerKind};

use crate::entities::{Page, PageRef};
use crate::error::Result;

/// The pages the current actor is permitted to see.
pub trait VisiblePages {
    /// Visible pages whose slug matches `pattern` under LIKE semantics.
    fn find_by_slug_like(&self, pattern: &str) -> Result<Vec<PageRef>>;

    /// Whether a given page is visible. Used when expanding chapters.
    fn is_visible(&self, page: &Page) -> bool;
}
