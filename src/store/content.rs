// src/store/content.rs
// =============================================================================
// The in-memory content store.
//
// A content dump is a JSON object with one array per record type. Several
// dumps can be merged (one per book, for example); records are kept in the
// order they were loaded.
//
// The relationship lookups mirror what the wiki's page model offers:
// - chapter / has_chapter
// - revisions (saved versions only, newest first) and current_revision
// - all_revisions (every type)
// - attachments (in their display order)
// =============================================================================

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ScopedStore;
use crate::entities::{
    Attachment, Book, Chapter, Page, PageRevision, RevisionType, Role, User,
};
use crate::error::{Result, WikiError};
use crate::permissions::{Actor, PermissionApplicator};

/// The on-disk (and on-wire) content format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDump {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub revisions: Vec<PageRevision>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    content: ContentDump,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dump(dump: ContentDump) -> Self {
        Self { content: dump }
    }

    /// Appends every record of `dump` to the store.
    pub fn merge(&mut self, dump: ContentDump) {
        debug!(
            books = dump.books.len(),
            chapters = dump.chapters.len(),
            pages = dump.pages.len(),
            "merging content dump"
        );
        let content = &mut self.content;
        content.books.extend(dump.books);
        content.chapters.extend(dump.chapters);
        content.pages.extend(dump.pages);
        content.revisions.extend(dump.revisions);
        content.attachments.extend(dump.attachments);
        content.users.extend(dump.users);
        content.roles.extend(dump.roles);
    }

    pub fn books(&self) -> &[Book] {
        &self.content.books
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.content.chapters
    }

    pub fn pages(&self) -> &[Page] {
        &self.content.pages
    }

    pub fn book(&self, id: u64) -> Option<&Book> {
        self.content.books.iter().find(|book| book.id == id)
    }

    pub fn book_by_slug(&self, slug: &str) -> Option<&Book> {
        self.content.books.iter().find(|book| book.slug == slug)
    }

    pub fn page(&self, id: u64) -> Option<&Page> {
        self.content.pages.iter().find(|page| page.id == id)
    }

    /// The chapter this page is in, if any.
    pub fn chapter(&self, page: &Page) -> Option<&Chapter> {
        let chapter_id = page.chapter_id?;
        self.content
            .chapters
            .iter()
            .find(|chapter| chapter.id == chapter_id)
    }

    pub fn has_chapter(&self, page: &Page) -> bool {
        self.chapter(page).is_some()
    }

    /// Every revision of the page, drafts included, in stored order.
    pub fn all_revisions(&self, page: &Page) -> Vec<&PageRevision> {
        self.content
            .revisions
            .iter()
            .filter(|revision| revision.page_id == page.id)
            .collect()
    }

    /// Saved versions of the page, newest first. Ties on the timestamp are
    /// broken by the higher id.
    pub fn revisions(&self, page: &Page) -> Vec<&PageRevision> {
        let mut revisions: Vec<&PageRevision> = self
            .all_revisions(page)
            .into_iter()
            .filter(|revision| revision.kind == RevisionType::Version)
            .collect();
        revisions.sort_by_key(|revision| Reverse((revision.created_at, revision.id)));
        revisions
    }

    pub fn current_revision(&self, page: &Page) -> Option<&PageRevision> {
        self.revisions(page).into_iter().next()
    }

    /// Attachments uploaded to the page, in ascending `order`.
    pub fn attachments(&self, page: &Page) -> Vec<&Attachment> {
        let mut attachments: Vec<&Attachment> = self
            .content
            .attachments
            .iter()
            .filter(|attachment| attachment.uploaded_to == page.id)
            .collect();
        attachments.sort_by_key(|attachment| attachment.order);
        attachments
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.content.users.iter().find(|user| user.id == id)
    }

    /// Resolves a user and their roles into an actor.
    pub fn actor(&self, user_id: u64) -> Result<Actor> {
        let user = self.user(user_id).ok_or(WikiError::UserNotFound(user_id))?;
        let roles = self
            .content
            .roles
            .iter()
            .filter(|role| user.roles.contains(&role.id))
            .cloned()
            .collect();

        Ok(Actor::new(user.clone(), roles))
    }

    /// This store as seen by `actor`.
    pub fn scoped<'a>(&'a self, actor: &'a Actor) -> ScopedStore<'a> {
        ScopedStore::new(self, actor, PermissionApplicator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::test_page;
    use chrono::{TimeZone, Utc};

    fn revision(id: u64, page_id: u64, kind: RevisionType, day: u32) -> PageRevision {
        PageRevision {
            id,
            page_id,
            kind,
            name: format!("rev {}", id),
            html: String::new(),
            markdown: String::new(),
            summary: String::new(),
            revision_number: id as u32,
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            created_by: Some(1),
        }
    }

    fn attachment(id: u64, page_id: u64, order: i64) -> Attachment {
        Attachment {
            id,
            name: format!("file {}", id),
            path: format!("uploads/{}.pdf", id),
            extension: "pdf".to_string(),
            uploaded_to: page_id,
            order,
            external: false,
        }
    }

    fn store() -> ContentStore {
        let mut in_chapter = test_page(2, "in-chapter", "");
        in_chapter.chapter_id = Some(10);

        ContentStore::from_dump(ContentDump {
            chapters: vec![Chapter {
                id: 10,
                book_id: 1,
                name: "Basics".to_string(),
                slug: "basics".to_string(),
                description: String::new(),
                priority: 0,
                view_roles: None,
            }],
            pages: vec![test_page(1, "loose", ""), in_chapter],
            revisions: vec![
                revision(1, 1, RevisionType::Version, 1),
                revision(2, 1, RevisionType::Version, 3),
                revision(3, 1, RevisionType::UpdateDraft, 4),
                revision(4, 1, RevisionType::Version, 3),
                revision(5, 2, RevisionType::Version, 2),
            ],
            attachments: vec![attachment(1, 1, 3), attachment(2, 1, 1), attachment(3, 2, 0)],
            users: vec![User {
                id: 1,
                name: "Ada".to_string(),
                email: String::new(),
                roles: vec![2],
                permissions: Vec::new(),
            }],
            roles: vec![
                Role {
                    id: 1,
                    display_name: "Admin".to_string(),
                    system_name: "admin".to_string(),
                },
                Role {
                    id: 2,
                    display_name: "Editor".to_string(),
                    system_name: "editor".to_string(),
                },
            ],
            ..ContentDump::default()
        })
    }

    #[test]
    fn test_chapter_lookup() {
        let store = store();
        let loose = store.page(1).unwrap();
        let in_chapter = store.page(2).unwrap();

        assert!(!store.has_chapter(loose));
        assert!(store.has_chapter(in_chapter));
        assert_eq!(store.chapter(in_chapter).map(|c| c.slug.as_str()), Some("basics"));
    }

    #[test]
    fn test_revisions_are_versions_newest_first() {
        let store = store();
        let page = store.page(1).unwrap();

        let ids: Vec<u64> = store.revisions(page).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
        assert_eq!(store.current_revision(page).map(|r| r.id), Some(4));
        assert_eq!(store.all_revisions(page).len(), 4);
    }

    #[test]
    fn test_page_without_revisions_has_no_current() {
        let mut store = store();
        store.merge(ContentDump {
            pages: vec![test_page(3, "fresh", "")],
            ..ContentDump::default()
        });
        let page = store.page(3).unwrap();
        assert!(store.revisions(page).is_empty());
        assert!(store.current_revision(page).is_none());
    }

    #[test]
    fn test_attachments_in_order() {
        let store = store();
        let ids: Vec<u64> = store
            .attachments(store.page(1).unwrap())
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_actor_resolves_roles() {
        let store = store();
        let actor = store.actor(1).unwrap();
        assert_eq!(actor.roles.len(), 1);
        assert_eq!(actor.roles[0].display_name, "Editor");
        assert!(matches!(store.actor(99), Err(WikiError::UserNotFound(99))));
    }
}
