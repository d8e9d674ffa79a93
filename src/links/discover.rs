// src/links/discover.rs
// =============================================================================
// This module answers "which pages does this page link to?".
//
// How it works:
// 1. Scan the rendered HTML for <a> tags and take each href
// 2. The last non-empty path segment of the href is the candidate slug
// 3. Ask the visible scope for pages whose slug is LIKE that candidate
// 4. Collect the results, each page only once, in the order first seen
//
// One lookup is made per href. Pages have a handful of links, so this is
// fine; it is not meant for documents with thousands of anchors.
// =============================================================================

use std::collections::HashSet;

use tracing::{debug, trace};

use super::scanner::{slug_from_href, LinkScanner};
use super::VisiblePages;
use crate::entities::PageRef;
use crate::error::Result;

/// An insertion-ordered set of pages keyed by page id.
#[derive(Debug, Default)]
pub struct PageSet {
    seen: HashSet<u64>,
    pages: Vec<PageRef>,
}

impl PageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the page unless one with the same id is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, page: PageRef) -> bool {
        if !self.seen.insert(page.id) {
            return false;
        }
        self.pages.push(page);
        true
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn into_vec(self) -> Vec<PageRef> {
        self.pages
    }
}

impl Extend<PageRef> for PageSet {
    fn extend<I: IntoIterator<Item = PageRef>>(&mut self, iter: I) {
        for page in iter {
            self.insert(page);
        }
    }
}

/// Collects the visible pages linked from `html`.
///
/// Parameters:
///   html: rendered page HTML, possibly malformed (bad markup just yields
///         fewer matches)
///   scanner: how anchors are found
///   pages: the visible scope of the current actor
///
/// Returns: the linked pages, deduplicated by id, in first-seen order.
/// An error only comes from the scope's lookup itself.
pub fn local_linked_pages<S, V>(html: &str, scanner: &S, pages: &V) -> Result<Vec<PageRef>>
where
    S: LinkScanner + ?Sized,
    V: VisiblePages + ?Sized,
{
    let mut linked = PageSet::new();

    for href in scanner.scan(html) {
        let Some(slug) = slug_from_href(&href) else {
            trace!(href = %href, "no slug in link target");
            continue;
        };

        let found = pages.find_by_slug_like(slug)?;
        trace!(href = %href, slug, matches = found.len(), "looked up link target");
        linked.extend(found);
    }

    debug!(linked = linked.len(), "collected local linked pages");
    Ok(linked.into_vec())
}
