// src/render/mod.rs
// =============================================================================
// Turning content into HTML.
//
// Submodules:
// - markdown: page source -> rendered page HTML
// - home: the personalized home page of the current user
// - document: one HTML document for a whole book, for PDF conversion
// =============================================================================

mod document;
mod home;
mod markdown;

pub use document::{assemble, export_book};
pub use home::{
    my_documents_query, render_home, role_documents_query, role_processes_query, DocumentFilter,
    CREATE_SHELF_CAPABILITY,
};
pub use markdown::MarkdownRenderer;

use crate::entities::Page;

/// Produces the final HTML of a page from its stored content.
pub trait ContentRenderer {
    fn render(&self, page: &Page) -> String;
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/b&gt;"
        );
    }
}
