// src/store/load.rs
// =============================================================================
// This module reads content dumps and builds the content store from them.
//
// A source is either a local path or an http(s) URL:
//   ./handbook.json
//   https://wiki.example.com/export/handbook.json
//
// Several sources are fetched concurrently (at most four at a time) and
// merged in the order they were given, so later dumps append to earlier ones.
//
// Rust concepts:
// - async fn + tokio::fs: read files without blocking the runtime
// - futures streams: `buffered` keeps results in input order while still
//   running the requests concurrently
// =============================================================================

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::{ContentDump, ContentStore};
use crate::error::{Result, WikiError};

// How many sources are loaded at once
const MAX_CONCURRENT_LOADS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Remote(Url),
}

impl FromStr for ContentSource {
    type Err = WikiError;

    // Anything with a scheme must be http(s); everything else is a path
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| WikiError::InvalidSource {
            source_str: s.to_string(),
            reason,
        };

        if s.trim().is_empty() {
            return Err(invalid("empty source".to_string()));
        }

        if s.contains("://") {
            let url = Url::parse(s).map_err(|e| invalid(e.to_string()))?;
            return match url.scheme() {
                "http" | "https" => Ok(ContentSource::Remote(url)),
                other => Err(invalid(format!("unsupported scheme '{}'", other))),
            };
        }

        Ok(ContentSource::File(PathBuf::from(s)))
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Loads every source and merges them into one store.
///
/// Fails on the first source that cannot be read or parsed.
pub async fn load_store(sources: &[ContentSource]) -> Result<ContentStore> {
    if sources.is_empty() {
        return Err(WikiError::NoContentSources);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| WikiError::Load {
            location: "http client".to_string(),
            message: e.to_string(),
        })?;

    let dumps: Vec<ContentDump> = stream::iter(sources)
        .map(|source| load_source(&client, source))
        .buffered(MAX_CONCURRENT_LOADS)
        .try_collect()
        .await?;

    let mut store = ContentStore::new();
    for dump in dumps {
        store.merge(dump);
    }

    info!(
        sources = sources.len(),
        books = store.books().len(),
        pages = store.pages().len(),
        "content loaded"
    );
    Ok(store)
}

async fn load_source(client: &Client, source: &ContentSource) -> Result<ContentDump> {
    let location = source.to_string();
    debug!(source = %location, "loading content");

    let body = match source {
        ContentSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| WikiError::Load {
                location: location.clone(),
                message: e.to_string(),
            })?,
        ContentSource::Remote(url) => fetch(client, url).await?,
    };

    serde_json::from_str(&body).map_err(|source| WikiError::Parse { location, source })
}

async fn fetch(client: &Client, url: &Url) -> Result<String> {
    let load_error = |message: String| WikiError::Load {
        location: url.to_string(),
        message,
    };

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| load_error(e.to_string()))?;

    if !response.status().is_success() {
        return Err(load_error(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| load_error(e.to_string()))
}
