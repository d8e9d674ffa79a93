// src/render/markdown.rs
// =============================================================================
// Renders page content to HTML.
//
// Pages written in the markdown editor keep their source in `markdown`; that
// source is rendered with pulldown-cmark. Pages from the WYSIWYG editor have
// no markdown and their stored `html` is already final.
// =============================================================================

use pulldown_cmark::{html, Options, Parser};

use super::ContentRenderer;
use crate::entities::Page;

#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn render(&self, page: &Page) -> String {
        if page.markdown.trim().is_empty() {
            return page.html.clone();
        }

        let parser = Parser::new_ext(&page.markdown, self.options);
        let mut rendered = String::with_capacity(page.markdown.len() * 3 / 2);
        html::push_html(&mut rendered, parser);
        rendered
    }
}
