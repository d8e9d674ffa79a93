// src/permissions/applicator.rs
// =============================================================================
// View rules for pages, chapters and books.
//
// Rules:
// 1. A draft page is visible only to the user who created it. This holds for
//    admins too, a draft is private until it is published.
// 2. A view restriction (a list of role ids) on the page wins over one on its
//    chapter, which wins over one on the book. No restriction anywhere means
//    everyone may view.
// 3. Admins pass every role restriction.
// =============================================================================

use crate::entities::{Book, Chapter, Page};

use super::Actor;

#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionApplicator;

impl PermissionApplicator {
    pub fn new() -> Self {
        Self
    }

    /// Decides whether `actor` may view `page`.
    ///
    /// Parameters:
    ///   chapter: the page's chapter, if it has one
    ///   book: the page's book, if it is known
    pub fn can_view_page(
        &self,
        actor: &Actor,
        page: &Page,
        chapter: Option<&Chapter>,
        book: Option<&Book>,
    ) -> bool {
        if page.draft && page.created_by != Some(actor.id()) {
            return false;
        }

        let restriction = page
            .view_roles
            .as_deref()
            .or_else(|| chapter.and_then(|c| c.view_roles.as_deref()))
            .or_else(|| book.and_then(|b| b.view_roles.as_deref()));

        self.allows(actor, restriction)
    }

    pub fn can_view_chapter(&self, actor: &Actor, chapter: &Chapter, book: Option<&Book>) -> bool {
        let restriction = chapter
            .view_roles
            .as_deref()
            .or_else(|| book.and_then(|b| b.view_roles.as_deref()));

        self.allows(actor, restriction)
    }

    pub fn can_view_book(&self, actor: &Actor, book: &Book) -> bool {
        self.allows(actor, book.view_roles.as_deref())
    }

    fn allows(&self, actor: &Actor, restriction: Option<&[u64]>) -> bool {
        match restriction {
            None => true,
            Some(_) if actor.is_admin() => true,
            Some(role_ids) => role_ids.iter().any(|id| actor.has_role(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::test_page;
    use crate::permissions::test_actor;

    fn book(view_roles: Option<Vec<u64>>) -> Book {
        Book {
            id: 1,
            name: "Handbook".to_string(),
            slug: "handbook".to_string(),
            description: String::new(),
            view_roles,
        }
    }

    fn chapter(view_roles: Option<Vec<u64>>) -> Chapter {
        Chapter {
            id: 10,
            book_id: 1,
            name: "Basics".to_string(),
            slug: "basics".to_string(),
            description: String::new(),
            priority: 0,
            view_roles,
        }
    }

    #[test]
    fn test_unrestricted_page_is_visible() {
        let actor = test_actor(5, &[]);
        let page = test_page(1, "intro", "");
        assert!(PermissionApplicator::new().can_view_page(&actor, &page, None, None));
    }

    #[test]
    fn test_draft_only_visible_to_creator() {
        let applicator = PermissionApplicator::new();
        let mut page = test_page(1, "intro", "");
        page.draft = true;
        page.created_by = Some(5);

        assert!(applicator.can_view_page(&test_actor(5, &[]), &page, None, None));
        assert!(!applicator.can_view_page(&test_actor(6, &[]), &page, None, None));

        let admin = test_actor(7, &[(1, "Admin", "admin")]);
        assert!(!applicator.can_view_page(&admin, &page, None, None));
    }

    #[test]
    fn test_page_restriction_overrides_book() {
        let applicator = PermissionApplicator::new();
        let mut page = test_page(1, "intro", "");
        page.view_roles = Some(vec![3]);
        let book = book(Some(vec![4]));

        let reader = test_actor(5, &[(3, "Reader", "")]);
        let other = test_actor(6, &[(4, "Staff", "")]);
        assert!(applicator.can_view_page(&reader, &page, None, Some(&book)));
        assert!(!applicator.can_view_page(&other, &page, None, Some(&book)));
    }

    #[test]
    fn test_page_inherits_chapter_then_book() {
        let applicator = PermissionApplicator::new();
        let page = test_page(1, "intro", "");
        let staff = test_actor(5, &[(4, "Staff", "")]);

        let restricted_chapter = chapter(Some(vec![9]));
        assert!(!applicator.can_view_page(&staff, &page, Some(&restricted_chapter), Some(&book(None))));

        let open_chapter = chapter(None);
        assert!(applicator.can_view_page(&staff, &page, Some(&open_chapter), Some(&book(Some(vec![4])))));
        assert!(!applicator.can_view_page(&staff, &page, Some(&open_chapter), Some(&book(Some(vec![8])))));
    }

    #[test]
    fn test_admin_passes_role_restrictions() {
        let applicator = PermissionApplicator::new();
        let admin = test_actor(7, &[(1, "Admin", "admin")]);
        assert!(applicator.can_view_book(&admin, &book(Some(vec![99]))));
        assert!(applicator.can_view_chapter(&admin, &chapter(Some(vec![99])), None));
    }
}
