// tests/export_pipeline.rs
// Loads a content dump from disk and runs link discovery and the book export
// through the public API, the way the CLI does.

use std::io::Write;

use wiki_linker::links::{
    flatten, local_linked_pages, replace_links_for_export, HtmlLinkScanner, RegexLinkScanner,
    ReplacementLog, WorkingEntry,
};
use wiki_linker::render::{export_book, MarkdownRenderer};
use wiki_linker::store::{load_store, ContentSource};
use wiki_linker::WikiError;

const DUMP: &str = r##"{
  "books": [{"id": 1, "name": "Operations", "slug": "ops"}],
  "chapters": [{"id": 5, "book_id": 1, "name": "Setup", "slug": "setup", "priority": 2}],
  "pages": [
    {"id": 1, "book_id": 1, "name": "Overview", "slug": "overview", "priority": 1,
     "html": "<p>See <a href=\"/books/ops/page/install\">install</a> and <a href=\"/books/ops/page/install\">again</a>.</p><p><a href=\"https://rust-lang.org\">Rust</a></p>"},
    {"id": 2, "book_id": 1, "chapter_id": 5, "name": "Install", "slug": "install", "priority": 1,
     "markdown": "Back to the [overview](/books/ops/pages/overview)."},
    {"id": 3, "book_id": 1, "chapter_id": 5, "name": "Draft", "slug": "", "priority": 2, "draft": true, "created_by": 2,
     "html": "<a href=\"/books/ops/page/overview\">wip</a>"}
  ],
  "users": [
    {"id": 1, "name": "Ada", "roles": [1]},
    {"id": 2, "name": "Grace", "roles": [1]}
  ],
  "roles": [{"id": 1, "display_name": "Operator"}]
}"##;

async fn load() -> wiki_linker::store::ContentStore {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DUMP.as_bytes()).unwrap();
    let source = ContentSource::File(file.path().to_path_buf());
    load_store(&[source]).await.unwrap()
}

#[tokio::test]
async fn linked_pages_are_found_once() {
    let store = load().await;
    let ada = store.actor(1).unwrap();
    let scope = store.scoped(&ada);
    let page = scope.get_by_slugs("ops", "overview").unwrap();

    let regex = local_linked_pages(&page.html, &RegexLinkScanner, &scope).unwrap();
    let ids: Vec<u64> = regex.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);

    let parsed = local_linked_pages(&page.html, &HtmlLinkScanner::default(), &scope).unwrap();
    assert_eq!(parsed, regex);
}

#[tokio::test]
async fn missing_page_is_reported() {
    let store = load().await;
    let ada = store.actor(1).unwrap();
    let scope = store.scoped(&ada);

    assert!(matches!(
        scope.get_by_slugs("ops", "nope"),
        Err(WikiError::PageNotFound { .. })
    ));
}

#[tokio::test]
async fn export_links_stay_inside_the_document() {
    let store = load().await;
    let ada = store.actor(1).unwrap();
    let mut log = ReplacementLog::new();

    let html = export_book(
        &store.scoped(&ada),
        "ops",
        &MarkdownRenderer::default(),
        &RegexLinkScanner,
        Some(&mut log),
    )
    .unwrap();

    assert!(html.contains(r##"<a href="#page-2">install</a> and <a href="#page-2">again</a>"##));
    assert!(html.contains(r##"<a href="#page-1">overview</a>"##));
    assert!(html.contains(r#"<a href="https://rust-lang.org">Rust</a>"#));
    assert!(!html.contains("/books/ops/page/install"));
    assert!(!html.contains("wip"));

    assert_eq!(log.get("/books/ops/page/install").map(String::as_str), Some("#page-2"));
    assert_eq!(log.get("/books/ops/pages/overview").map(String::as_str), Some("#page-1"));
}

#[tokio::test]
async fn drafts_join_the_export_of_their_author() {
    let store = load().await;
    let grace = store.actor(2).unwrap();
    let scope = store.scoped(&grace);
    let mut nodes = scope.book_contents("ops").unwrap();

    let mut entries = flatten(&mut nodes, &scope);
    let kinds: Vec<(bool, u64)> = entries.iter().map(|e| (e.is_chapter(), e.id())).collect();
    assert_eq!(kinds, vec![(false, 1), (true, 5), (false, 2), (false, 3)]);

    replace_links_for_export(&mut entries, &RegexLinkScanner, None);
    let draft = entries.iter().filter_map(WorkingEntry::as_page).find(|p| p.id == 3).unwrap();
    assert_eq!(draft.html, r##"<a href="#page-1">wip</a>"##);
}
