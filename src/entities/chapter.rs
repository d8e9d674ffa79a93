// src/entities/chapter.rs
// =============================================================================
// Chapters group the pages of a book. A book's top level is a mix of chapters
// and loose pages, represented here as `ContentNode`.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u64,
    pub book_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub view_roles: Option<Vec<u64>>,
}

/// A chapter together with its child pages, ordered by priority.
///
/// The pages are all children of the chapter; whether the current actor may
/// see each of them is decided when the chapter is expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterNode {
    pub chapter: Chapter,
    pub pages: Vec<Page>,
}

/// One top-level entry of a book.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Page(Page),
    Chapter(ChapterNode),
}

impl ContentNode {
    pub fn id(&self) -> u64 {
        match self {
            ContentNode::Page(page) => page.id,
            ContentNode::Chapter(node) => node.chapter.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ContentNode::Page(page) => &page.name,
            ContentNode::Chapter(node) => &node.chapter.name,
        }
    }

    pub fn priority(&self) -> i64 {
        match self {
            ContentNode::Page(page) => page.priority,
            ContentNode::Chapter(node) => node.chapter.priority,
        }
    }
}
