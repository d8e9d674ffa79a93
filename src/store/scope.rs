// src/store/scope.rs
// =============================================================================
// The content store as seen by one actor.
//
// Everything that reads content on behalf of a user goes through this view,
// so the permission rules are applied in one place. It also implements the
// `VisiblePages` collaborator that the link operations expect.
// =============================================================================

use tracing::warn;
use url::Url;

use super::ContentStore;
use crate::entities::{Book, ChapterNode, ContentNode, Page, PageRef};
use crate::error::{Result, WikiError};
use crate::links::{like_matches, VisiblePages};
use crate::permissions::{Actor, PermissionApplicator};

pub struct ScopedStore<'a> {
    store: &'a ContentStore,
    actor: &'a Actor,
    applicator: PermissionApplicator,
}

impl<'a> ScopedStore<'a> {
    pub fn new(store: &'a ContentStore, actor: &'a Actor, applicator: PermissionApplicator) -> Self {
        Self {
            store,
            actor,
            applicator,
        }
    }

    pub fn store(&self) -> &'a ContentStore {
        self.store
    }

    pub fn actor(&self) -> &'a Actor {
        self.actor
    }

    pub fn can_view_page(&self, page: &Page) -> bool {
        let chapter = self.store.chapter(page);
        let book = self.store.book(page.book_id);
        self.applicator
            .can_view_page(self.actor, page, chapter, book)
    }

    /// All pages the actor may view, in stored order.
    pub fn visible_pages(&self) -> impl Iterator<Item = &'a Page> + '_ {
        self.store
            .pages()
            .iter()
            .filter(move |page| self.can_view_page(page))
    }

    /// A visible book by slug.
    pub fn book_by_slug(&self, slug: &str) -> Result<&'a Book> {
        self.store
            .book_by_slug(slug)
            .filter(|book| self.applicator.can_view_book(self.actor, book))
            .ok_or_else(|| WikiError::BookNotFound(slug.to_string()))
    }

    /// The visible page with the given book and page slugs.
    ///
    /// Fails with `PageNotFound` when the book does not exist, is hidden, or
    /// holds no visible page with that slug.
    pub fn get_by_slugs(&self, book_slug: &str, page_slug: &str) -> Result<&'a Page> {
        let not_found = || WikiError::PageNotFound {
            book_slug: book_slug.to_string(),
            page_slug: page_slug.to_string(),
        };

        let book = self.book_by_slug(book_slug).map_err(|_| not_found())?;
        self.visible_pages()
            .find(|page| page.book_id == book.id && page.slug == page_slug)
            .ok_or_else(not_found)
    }

    /// The top level of a book: visible chapters (with all their pages) and
    /// visible loose pages, ordered by priority and then id.
    pub fn book_contents(&self, book_slug: &str) -> Result<Vec<ContentNode>> {
        let book = self.book_by_slug(book_slug)?;

        let mut nodes: Vec<ContentNode> = self
            .store
            .chapters()
            .iter()
            .filter(|chapter| chapter.book_id == book.id)
            .filter(|chapter| self.applicator.can_view_chapter(self.actor, chapter, Some(book)))
            .map(|chapter| {
                let mut pages: Vec<Page> = self
                    .store
                    .pages()
                    .iter()
                    .filter(|page| page.chapter_id == Some(chapter.id))
                    .cloned()
                    .collect();
                pages.sort_by_key(|page| (page.priority, page.id));
                ContentNode::Chapter(ChapterNode {
                    chapter: chapter.clone(),
                    pages,
                })
            })
            .collect();

        // A page whose chapter is missing from the dump is shown at the top level
        let loose = self
            .visible_pages()
            .filter(|page| page.book_id == book.id)
            .filter(|page| match page.chapter_id {
                None => true,
                Some(_) if self.store.has_chapter(page) => false,
                Some(chapter_id) => {
                    warn!(page = page.id, chapter = chapter_id, "page points at a missing chapter");
                    true
                }
            });
        nodes.extend(loose.cloned().map(ContentNode::Page));

        nodes.sort_by_key(|node| (node.priority(), node.id()));
        Ok(nodes)
    }

    /// The URL of `page`, using its book's slug.
    pub fn page_url(&self, page: &Page, base: &Url, path: &str) -> String {
        let book_slug = self
            .store
            .book(page.book_id)
            .map(|book| book.slug.as_str())
            .unwrap_or_default();
        page.url(base, book_slug, path)
    }
}

impl VisiblePages for ScopedStore<'_> {
    fn find_by_slug_like(&self, pattern: &str) -> Result<Vec<PageRef>> {
        Ok(self
            .visible_pages()
            .filter(|page| like_matches(pattern, &page.slug))
            .map(Page::to_ref)
            .collect())
    }

    fn is_visible(&self, page: &Page) -> bool {
        self.can_view_page(page)
    }
}
