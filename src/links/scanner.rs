// src/links/scanner.rs
// =============================================================================
// This module finds the link targets (href values) of <a> tags in HTML.
//
// There are two scanners behind the `LinkScanner` trait:
// - RegexLinkScanner: the pattern the wiki has always used. It works on the
//   raw text, so it tolerates broken markup and returns hrefs exactly as
//   they are written.
// - HtmlLinkScanner: parses the HTML with `scraper` and reads the href
//   attribute of every <a>. Entities are decoded, so the values can differ
//   from the raw text (`&amp;` comes back as `&`). The export rewrite maps
//   them back to their written form before replacing.
//
// Both return hrefs in document order, duplicates included.
// =============================================================================

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

// <a ...href=(optional quote)(target)(same quote)...>...</a>
//
// Case-insensitive and '.' crosses line breaks. The quoted branch comes first
// so href="x" captures x; an unquoted href stops at the first space or '>'.
// The trailing `(.*?)</a>` means an <a> is only reported once its closing tag
// is found.
static ANCHOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // The pattern is a constant, so failing to compile it is a programmer error
    Regex::new(r#"(?si)<a\s[^>]*?href=(?:"([^" >]*)"|([^" >]*))[^>]*?>(.*?)</a>"#)
        .expect("anchor pattern is a valid regex")
});

/// Finds the href of every anchor tag in a piece of HTML.
pub trait LinkScanner {
    fn scan(&self, html: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegexLinkScanner;

impl LinkScanner for RegexLinkScanner {
    fn scan(&self, html: &str) -> Vec<String> {
        ANCHOR_PATTERN
            .captures_iter(html)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

pub struct HtmlLinkScanner {
    selector: Selector,
}

impl Default for HtmlLinkScanner {
    fn default() -> Self {
        Self {
            // Constant selector, known to be valid
            selector: Selector::parse("a[href]").expect("a[href] is a valid selector"),
        }
    }
}

impl LinkScanner for HtmlLinkScanner {
    fn scan(&self, html: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        fragment
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

/// Which scanner to use, as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerKind {
    #[default]
    Regex,
    Html,
}

impl ScannerKind {
    pub fn build(self) -> Box<dyn LinkScanner> {
        match self {
            ScannerKind::Regex => Box::new(RegexLinkScanner),
            ScannerKind::Html => Box::new(HtmlLinkScanner::default()),
        }
    }
}

impl FromStr for ScannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regex" => Ok(ScannerKind::Regex),
            "html" => Ok(ScannerKind::Html),
            other => Err(format!("unknown scanner '{}', expected 'regex' or 'html'", other)),
        }
    }
}

/// The candidate slug of a link target: its last non-empty path segment.
///
/// Example: "/books/ops/page/install/" -> Some("install")
pub fn slug_from_href(href: &str) -> Option<&str> {
    href.split('/').rev().find(|segment| !segment.is_empty())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why keep a regex when scraper exists?
//    - It matches the anchors the wiki has always matched, broken markup too
//    - Its hrefs are the page text itself, no decoding involved
//
// 2. Why Lazy<Regex>?
//    - Compiling a regex is expensive compared to running it
//    - Lazy compiles it on first use and shares it afterwards
// -----------------------------------------------------------------------------
