// src/config.rs
// =============================================================================
// Runtime configuration, validated once at startup.
//
// Values come from command-line flags (with WIKI_* environment fallbacks
// handled by clap). Nothing here reads global state: the base URL and the
// content sources are passed on explicitly to whatever needs them.
// =============================================================================

use url::Url;

use crate::error::{Result, WikiError};
use crate::store::ContentSource;

pub const DEFAULT_BASE_URL: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root URL of the wiki, used for page and action links.
    pub base_url: Url,
    /// Content dumps to load, in merge order.
    pub sources: Vec<ContentSource>,
}

impl AppConfig {
    /// Validates raw settings.
    ///
    /// The base URL must be an absolute http(s) URL; at least one content
    /// source is required.
    pub fn new(base_url: &str, sources: &[String]) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        if sources.is_empty() {
            return Err(WikiError::NoContentSources);
        }
        let sources = sources
            .iter()
            .map(|source| source.parse())
            .collect::<Result<Vec<ContentSource>>>()?;

        Ok(Self { base_url, sources })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| WikiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
