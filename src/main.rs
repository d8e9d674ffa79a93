// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout stays clean for HTML/JSON output)
// 3. Load the content dumps and resolve the acting user
// 4. Dispatch to the appropriate subcommand handler
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};
use wiki_linker::config::AppConfig;
use wiki_linker::entities::PageRef;
use wiki_linker::links::{local_linked_pages, ReplacementLog, ScannerKind};
use wiki_linker::permissions::Actor;
use wiki_linker::render::{export_book, render_home, ContentRenderer, MarkdownRenderer};
use wiki_linker::store::{load_store, ScopedStore};

#[tokio::main]
async fn main() {
    std::process::exit(exit_code(run().await));
}

// Any error, whether from the library or the CLI itself, exits with 2
fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::new(&cli.base_url, &cli.content)?;
    let user_id = cli
        .user
        .ok_or_else(|| anyhow!("no user given, pass --user or set WIKI_USER"))?;

    let store = load_store(&config.sources)
        .await
        .context("could not load wiki content")?;
    let actor = store.actor(user_id)?;
    let scope = store.scoped(&actor);
    let renderer = MarkdownRenderer::default();

    match cli.command {
        Commands::Linked { book, page, scanner, json } => {
            handle_linked(&scope, &config, &renderer, &book, &page, scanner, json)
        }
        Commands::Export { book, output, scanner, show_replacements } => {
            let mut log = ReplacementLog::new();
            let html = export_book(
                &scope,
                &book,
                &renderer,
                scanner.build().as_ref(),
                show_replacements.then_some(&mut log),
            )?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, html)
                        .await
                        .with_context(|| format!("could not write {}", path.display()))?;
                    eprintln!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }

            for (href, anchor) in &log {
                eprintln!("{} -> {}", href, anchor);
            }
            Ok(0)
        }
        Commands::Page { book, page } => {
            let page = scope.get_by_slugs(&book, &page)?;
            let json = scope.page_for_json_display(page, &renderer);
            println!("{}", serde_json::to_string_pretty(&json)?);
            Ok(0)
        }
        Commands::Home => {
            print_home(&actor, &config);
            Ok(0)
        }
    }
}

// Logs go to stderr; the level grows with each -v
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Handles the 'linked' subcommand
//
// Renders the page, scans it for anchors and prints every visible page it
// links to.
fn handle_linked(
    scope: &ScopedStore<'_>,
    config: &AppConfig,
    renderer: &MarkdownRenderer,
    book: &str,
    page: &str,
    scanner: ScannerKind,
    json: bool,
) -> Result<i32> {
    let page = scope.get_by_slugs(book, page)?;
    let html = renderer.render(page);
    let linked = local_linked_pages(&html, scanner.build().as_ref(), scope)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&linked)?);
    } else {
        print_table(scope, config, &linked);
    }
    Ok(0)
}

// Prints linked pages as a human-readable table
fn print_table(scope: &ScopedStore<'_>, config: &AppConfig, linked: &[PageRef]) {
    if linked.is_empty() {
        println!("No linked pages found");
        return;
    }

    println!("{:<8} {:<30} {:<60}", "ID", "SLUG", "URL");
    println!("{}", "=".repeat(98));

    for page_ref in linked {
        let url = scope
            .store()
            .page(page_ref.id)
            .map(|page| scope.page_url(page, &config.base_url, ""))
            .unwrap_or_default();
        println!("{:<8} {:<30} {:<60}", page_ref.id, page_ref.slug, url);
    }

    println!();
    println!("Total: {}", linked.len());
}

fn print_home(actor: &Actor, config: &AppConfig) {
    println!("{}", render_home(actor, actor, &config.base_url));
}
