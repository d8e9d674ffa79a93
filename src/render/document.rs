// src/render/document.rs
// =============================================================================
// One HTML document for a whole book.
//
// The exported document gives every page a wrapper with id="page-<id>", which
// is what the rewritten links (#page-<id>) point at. Chapters get a heading
// with id="chapter-<id>" and their visible pages follow it, in book order.
//
// export_book runs the whole pipeline:
//   book contents -> render page HTML -> flatten + rewrite links -> assemble
// =============================================================================

use tracing::info;

use super::{escape_html, ContentRenderer};
use crate::entities::{Book, ContentNode, Page};
use crate::error::Result;
use crate::links::{flatten, replace_links_for_export, LinkScanner, ReplacementLog, VisiblePages};
use crate::store::ScopedStore;

fn push_page(html: &mut String, page: &Page) {
    html.push_str(&format!(
        "<div id=\"page-{}\" class=\"page-content\">\n<h1>{}</h1>\n{}\n</div>\n",
        page.id,
        escape_html(&page.name),
        page.html
    ));
}

/// Concatenates a book's nodes into a standalone HTML document.
///
/// Chapter pages that `pages` does not consider visible are left out, the
/// same way `flatten` leaves them out of the working list.
pub fn assemble<V>(book: &Book, nodes: &[ContentNode], pages: &V) -> String
where
    V: VisiblePages + ?Sized,
{
    let title = escape_html(&book.name);
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<h1 class=\"book-title\">{}</h1>\n",
        title, title
    );

    for node in nodes {
        match node {
            ContentNode::Page(page) => push_page(&mut html, page),
            ContentNode::Chapter(chapter) => {
                html.push_str(&format!(
                    "<h1 id=\"chapter-{}\" class=\"chapter-title\">{}</h1>\n",
                    node.id(),
                    escape_html(node.name())
                ));
                for page in chapter.pages.iter().filter(|page| pages.is_visible(page)) {
                    push_page(&mut html, page);
                }
            }
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Exports the book with slug `book_slug` as seen by the scope's actor.
///
/// Page content is rendered first so that links written in markdown are
/// rewritten too. When `log` is given it receives every href that was
/// turned into an anchor.
pub fn export_book<R, S>(
    scope: &ScopedStore<'_>,
    book_slug: &str,
    renderer: &R,
    scanner: &S,
    log: Option<&mut ReplacementLog>,
) -> Result<String>
where
    R: ContentRenderer + ?Sized,
    S: LinkScanner + ?Sized,
{
    let book = scope.book_by_slug(book_slug)?;
    let mut nodes = scope.book_contents(book_slug)?;

    for node in nodes.iter_mut() {
        match node {
            ContentNode::Page(page) => page.html = renderer.render(page),
            ContentNode::Chapter(chapter) => {
                for page in chapter.pages.iter_mut() {
                    page.html = renderer.render(page);
                }
            }
        }
    }

    let mut entries = flatten(&mut nodes, scope);
    let replaced = replace_links_for_export(&mut entries, scanner, log);
    info!(book = book_slug, entries = entries.len(), replaced, "book flattened for export");
    drop(entries);

    Ok(assemble(book, &nodes, scope))
}
