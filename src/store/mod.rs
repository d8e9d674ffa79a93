// src/store/mod.rs
// =============================================================================
// The content store: books, chapters, pages and their related records, held
// in memory.
//
// Submodules:
// - content: the store itself and the relationship lookups
// - scope: the store as seen by one actor (only what they may view)
// - display: the JSON projection of a page
// - load: reading content dumps from files and URLs
// =============================================================================

mod content;
mod display;
mod load;
mod scope;

pub use content::{ContentDump, ContentStore};
pub use display::{PageJson, UserRef};
pub use load::{load_store, ContentSource};
pub use scope::ScopedStore;

#[cfg(test)]
pub(crate) use scope::fixtures;
