// src/entities/page.rs
// =============================================================================
// The page: the leaf of the content tree and the unit that links point at.
//
// A page stores its content twice: the raw source (`markdown`, empty for
// pages written in the WYSIWYG editor) and the `html` that is shown to
// readers. All link scanning happens on `html`.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::urlencode;

/// A name/value label attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub book_id: u64,
    #[serde(default)]
    pub chapter_id: Option<u64>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub template: bool,
    #[serde(default)]
    pub revision_count: u32,
    #[serde(default)]
    pub editor: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub updated_by: Option<u64>,
    #[serde(default)]
    pub owned_by: Option<u64>,
    /// Slug of the owning book when it was joined in with the page.
    #[serde(default)]
    pub book_slug: Option<String>,
    /// Role ids allowed to view this page. `None` inherits from the chapter/book.
    #[serde(default)]
    pub view_roles: Option<Vec<u64>>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Page {
    /// Builds the public URL of this page.
    ///
    /// Published pages are addressed by slug (`/books/<book>/page/<slug>`),
    /// drafts by id (`/books/<book>/draft/<id>`). `path` is appended with its
    /// surrounding slashes trimmed, e.g. `"edit"` gives `.../page/<slug>/edit`.
    pub fn url(&self, base: &Url, book_slug: &str, path: &str) -> String {
        let book_slug = self.book_slug.as_deref().unwrap_or(book_slug);
        let (kind, key) = if self.draft {
            ("draft", self.id.to_string())
        } else {
            ("page", urlencode(&self.slug))
        };

        let book_part = urlencode(book_slug);
        let parts = [
            "books",
            book_part.as_str(),
            kind,
            key.as_str(),
            path.trim_matches('/'),
        ];
        let joined = parts.join("/");

        format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            joined.trim_matches('/')
        )
    }

    pub fn has_chapter(&self) -> bool {
        self.chapter_id.is_some()
    }

    /// The list projection of this page (no content fields besides `text`).
    pub fn to_ref(&self) -> PageRef {
        PageRef {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            book_id: self.book_id,
            chapter_id: self.chapter_id,
            draft: self.draft,
            template: self.template,
            text: self.text.clone(),
            priority: self.priority,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A page as it appears in listings and lookup results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub book_id: u64,
    pub chapter_id: Option<u64>,
    pub draft: bool,
    pub template: bool,
    pub text: String,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) fn test_page(id: u64, slug: &str, html: &str) -> Page {
    Page {
        id,
        book_id: 1,
        chapter_id: None,
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        html: html.to_string(),
        markdown: String::new(),
        text: String::new(),
        draft: false,
        template: false,
        revision_count: 1,
        editor: "wysiwyg".to_string(),
        priority: id as i64,
        created_at: DateTime::<Utc>::default(),
        updated_at: DateTime::<Utc>::default(),
        created_by: Some(1),
        updated_by: Some(1),
        owned_by: Some(1),
        book_slug: None,
        view_roles: None,
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://wiki.example.com").unwrap()
    }

    #[test]
    fn test_url_for_published_page() {
        let page = test_page(7, "install guide", "");
        assert_eq!(
            page.url(&base(), "ops", ""),
            "https://wiki.example.com/books/ops/page/install+guide"
        );
    }

    #[test]
    fn test_url_appends_trimmed_path() {
        let page = test_page(7, "install", "");
        assert_eq!(
            page.url(&base(), "ops", "/edit/"),
            "https://wiki.example.com/books/ops/page/install/edit"
        );
    }

    #[test]
    fn test_url_for_draft_uses_id() {
        let mut page = test_page(7, "install", "");
        page.draft = true;
        assert_eq!(
            page.url(&base(), "ops", ""),
            "https://wiki.example.com/books/ops/draft/7"
        );
    }

    #[test]
    fn test_url_prefers_joined_book_slug_and_keeps_base_path() {
        let mut page = test_page(7, "install", "");
        page.book_slug = Some("handbook".to_string());
        let base = Url::parse("https://example.com/wiki/").unwrap();
        assert_eq!(
            page.url(&base, "ignored", ""),
            "https://example.com/wiki/books/handbook/page/install"
        );
    }

    #[test]
    fn test_deserialize_minimal_page() {
        let json = r#"{"id": 3, "book_id": 1, "name": "Intro", "slug": "intro"}"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.slug, "intro");
        assert!(!page.draft);
        assert!(!page.has_chapter());
        assert!(page.view_roles.is_none());
    }
}
