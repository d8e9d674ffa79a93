// src/error.rs
// Errors surfaced by the library. The binary wraps these in anyhow.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WikiError>;

#[derive(Debug, Error)]
pub enum WikiError {
    /// No visible page with this book/page slug pair.
    #[error("page not found: {book_slug}/{page_slug}")]
    PageNotFound { book_slug: String, page_slug: String },

    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(u64),

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("no content sources given")]
    NoContentSources,

    /// A content source that is neither a readable path nor an http(s) URL.
    #[error("invalid content source '{source_str}': {reason}")]
    InvalidSource { source_str: String, reason: String },

    #[error("failed to load {location}: {message}")]
    Load { location: String, message: String },

    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}
