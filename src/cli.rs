// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Global options say where the content comes from, which user we act as and
// what the wiki's base URL is. Each of them can also be set through a
// WIKI_* environment variable, which is handy in CI jobs.
//
// Subcommands:
// - linked: list the pages a page links to
// - export: write a whole book as one HTML document with in-document links
// - page: print a page as JSON
// - home: print the personalized home page
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use wiki_linker::config::DEFAULT_BASE_URL;
use wiki_linker::links::ScannerKind;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-linker",
    version,
    about = "Discover and rewrite cross-page links in wiki content",
    long_about = "wiki-linker loads wiki content dumps, finds which pages link to each other \
                  and flattens books into a single HTML document whose page links jump \
                  within the document, ready for PDF conversion."
)]
pub struct Cli {
    /// Content dump to load: a file path or an http(s) URL
    ///
    /// Repeat the flag (or separate with commas) to merge several dumps
    #[arg(long, short = 'c', env = "WIKI_CONTENT", value_delimiter = ',', global = true)]
    pub content: Vec<String>,

    /// Id of the user to act as; only what they may view is used
    #[arg(long, short = 'u', env = "WIKI_USER", global = true)]
    pub user: Option<u64>,

    /// Base URL of the wiki, used to build absolute links
    #[arg(long, env = "WIKI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the visible pages linked from a page
    ///
    /// Example: wiki-linker -c wiki.json -u 1 linked handbook getting-started
    Linked {
        /// Slug of the book the page is in
        book: String,

        /// Slug of the page
        page: String,

        /// How anchors are found: "regex" (default) or "html"
        #[arg(long, default_value = "regex")]
        scanner: ScannerKind,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export a book as one HTML document with in-document page links
    ///
    /// Example: wiki-linker -c wiki.json -u 1 export handbook -o handbook.html
    Export {
        /// Slug of the book
        book: String,

        /// Write the document here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// How anchors are found: "regex" (default) or "html"
        #[arg(long, default_value = "regex")]
        scanner: ScannerKind,

        /// Print every rewritten link to stderr
        #[arg(long)]
        show_replacements: bool,
    },

    /// Print a page as JSON, with rendered and raw HTML
    Page {
        /// Slug of the book the page is in
        book: String,

        /// Slug of the page
        page: String,
    },

    /// Print the personalized home page of the user
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linked() {
        let cli = Cli::parse_from([
            "wiki-linker", "-c", "a.json,b.json", "-u", "3", "linked", "handbook", "intro", "--json",
        ]);
        assert_eq!(cli.content, vec!["a.json", "b.json"]);
        assert_eq!(cli.user, Some(3));
        match cli.command {
            Commands::Linked { book, page, scanner, json } => {
                assert_eq!((book.as_str(), page.as_str()), ("handbook", "intro"));
                assert_eq!(scanner, ScannerKind::Regex);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "wiki-linker", "export", "handbook", "--scanner", "html", "-c", "a.json", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(matches!(
            cli.command,
            Commands::Export { scanner: ScannerKind::Html, .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_scanner() {
        let result = Cli::try_parse_from(["wiki-linker", "linked", "b", "p", "--scanner", "dom"]);
        assert!(result.is_err());
    }
}
