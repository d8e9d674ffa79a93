// src/lib.rs
// =============================================================================
// Library root for wiki-linker.
//
// The crate models the Book → Chapter → Page hierarchy of a wiki and the two
// link operations that work on rendered page HTML:
// - discovering the visible pages a page links to
// - rewriting page links into #page-<id> anchors for a flattened export
//
// Modules:
// - entities: pages, chapters, books, revisions, attachments, users
// - permissions: who may see what, and capability checks
// - store: the in-memory content store and its visible scope
// - links: scanning, discovery and export rewriting
// - render: markdown rendering, the home page and the export document
// =============================================================================

pub mod config;
pub mod entities;
pub mod error;
pub mod links;
pub mod permissions;
pub mod render;
pub mod store;

pub use error::{Result, WikiError};
