// src/store/display.rs
// The JSON shape of a single page as served to API clients: every content
// field, the stored HTML as `raw_html`, the rendered HTML as `html`, and the
// users behind it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ScopedStore;
use crate::entities::{Page, Tag};
use crate::render::ContentRenderer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageJson {
    pub id: u64,
    pub book_id: u64,
    pub chapter_id: Option<u64>,
    pub name: String,
    pub slug: String,
    pub html: String,
    pub raw_html: String,
    pub markdown: String,
    pub text: String,
    pub draft: bool,
    pub template: bool,
    pub revision_count: u32,
    pub editor: String,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub owned_by: Option<UserRef>,
    pub tags: Vec<Tag>,
}

impl ScopedStore<'_> {
    fn user_ref(&self, id: Option<u64>) -> Option<UserRef> {
        let user = self.store().user(id?)?;
        Some(UserRef {
            id: user.id,
            name: user.name.clone(),
        })
    }

    /// Builds the JSON projection of `page`, rendering its content with
    /// `renderer`.
    pub fn page_for_json_display<R>(&self, page: &Page, renderer: &R) -> PageJson
    where
        R: ContentRenderer + ?Sized,
    {
        PageJson {
            id: page.id,
            book_id: page.book_id,
            chapter_id: page.chapter_id,
            name: page.name.clone(),
            slug: page.slug.clone(),
            html: renderer.render(page),
            raw_html: page.html.clone(),
            markdown: page.markdown.clone(),
            text: page.text.clone(),
            draft: page.draft,
            template: page.template,
            revision_count: page.revision_count,
            editor: page.editor.clone(),
            priority: page.priority,
            created_at: page.created_at,
            updated_at: page.updated_at,
            created_by: self.user_ref(page.created_by),
            updated_by: self.user_ref(page.updated_by),
            owned_by: self.user_ref(page.owned_by),
            tags: page.tags.clone(),
        }
    }
}
