// src/links/export.rs
// =============================================================================
// This module prepares a book for export as one flattened document.
//
// How it works:
// 1. Flatten the book's top-level nodes into a working list. Each node is
//    added as-is; the visible pages of every chapter are appended at the end
//    of the list. Chapters are expanded one level only.
// 2. For every page in the list, scan its HTML for anchors.
// 3. Hrefs that contain "/page/" or "/pages/" are page links. Their last path
//    segment is looked up among the slugs of the pages in the working list.
// 4. On a hit, every literal occurrence of the href in that page's HTML is
//    replaced with "#page-<id>". The exported document gives each page an
//    element with that id, so the link now jumps within the document.
//
// Only the `html` field of pages changes, and only in memory. Rewriting is
// idempotent: "#page-<id>" is not a page link, so a second pass finds
// nothing to do.
// =============================================================================

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::scanner::{slug_from_href, LinkScanner};
use super::VisiblePages;
use crate::entities::{Chapter, ChapterNode, ContentNode, Page};

/// Original href -> the anchor it was replaced with.
pub type ReplacementLog = BTreeMap<String, String>;

/// One entry of the flattened export list.
#[derive(Debug)]
pub enum WorkingEntry<'a> {
    Chapter(&'a Chapter),
    Page(&'a mut Page),
}

impl WorkingEntry<'_> {
    pub fn id(&self) -> u64 {
        match self {
            WorkingEntry::Chapter(chapter) => chapter.id,
            WorkingEntry::Page(page) => page.id,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            WorkingEntry::Page(page) => Some(&**page),
            WorkingEntry::Chapter(_) => None,
        }
    }

    pub fn is_chapter(&self) -> bool {
        matches!(self, WorkingEntry::Chapter(_))
    }
}

/// Builds the working list for `nodes`.
///
/// Top-level pages are taken as given (the caller already filtered them);
/// chapter children are filtered through `pages.is_visible`.
pub fn flatten<'a, V>(nodes: &'a mut [ContentNode], pages: &V) -> Vec<WorkingEntry<'a>>
where
    V: VisiblePages + ?Sized,
{
    let mut entries = Vec::with_capacity(nodes.len());
    let mut chapter_pages = Vec::new();

    for node in nodes.iter_mut() {
        match node {
            ContentNode::Page(page) => entries.push(WorkingEntry::Page(page)),
            ContentNode::Chapter(ChapterNode {
                chapter,
                pages: children,
            }) => {
                entries.push(WorkingEntry::Chapter(chapter));
                chapter_pages.extend(
                    children
                        .iter_mut()
                        .filter(|page| pages.is_visible(page))
                        .map(WorkingEntry::Page),
                );
            }
        }
    }

    entries.extend(chapter_pages);
    entries
}

fn is_page_link(href: &str) -> bool {
    href.contains("/pages/") || href.contains("/page/")
}

/// How `href` is spelled in `html`: as given, or with `&` written as the
/// `&amp;` entity. Scanners that parse the markup hand back decoded values.
fn written_form(html: &str, href: &str) -> Option<String> {
    if html.contains(href) {
        return Some(href.to_string());
    }
    let escaped = href.replace('&', "&amp;");
    (escaped != href && html.contains(escaped.as_str())).then_some(escaped)
}

/// Rewrites page links in the working list into same-document anchors.
///
/// When `log` is given, every href that was replaced is recorded, as written
/// in the page, with its anchor. Returns the number of hrefs that were replaced.
pub fn replace_links_for_export<S>(
    entries: &mut [WorkingEntry<'_>],
    scanner: &S,
    mut log: Option<&mut ReplacementLog>,
) -> usize
where
    S: LinkScanner + ?Sized,
{
    // Slugs never change during the rewrite, so resolve against a snapshot
    let targets: Vec<(String, u64)> = entries
        .iter()
        .filter_map(WorkingEntry::as_page)
        .map(|page| (page.slug.clone(), page.id))
        .collect();

    let mut replaced = 0;

    for entry in entries.iter_mut() {
        let WorkingEntry::Page(page) = entry else {
            continue;
        };

        for href in scanner.scan(&page.html) {
            if !is_page_link(&href) {
                continue;
            }
            let Some(slug) = slug_from_href(&href) else {
                continue;
            };
            let Some((_, target_id)) = targets.iter().find(|(target, _)| target == slug) else {
                trace!(page = page.id, href = %href, "page link outside the export");
                continue;
            };

            let anchor = format!("#page-{}", target_id);
            // The same href can be scanned twice; the second time it is already gone
            let Some(written) = written_form(&page.html, &href) else {
                continue;
            };
            page.html = page.html.replace(written.as_str(), &anchor);
            replaced += 1;
            trace!(page = page.id, href = %written, anchor = %anchor, "rewrote page link");
            if let Some(log) = log.as_deref_mut() {
                log.insert(written, anchor);
            }
        }
    }

    debug!(entries = entries.len(), replaced, "rewrote links for export");
    replaced
}
