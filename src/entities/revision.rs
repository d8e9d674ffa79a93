use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Saved versions are `version`; autosaved editor drafts are `update_draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionType {
    Version,
    UpdateDraft,
}

/// A saved historical snapshot of a page's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRevision {
    pub id: u64,
    pub page_id: u64,
    #[serde(rename = "type")]
    pub kind: RevisionType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub revision_number: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<u64>,
}
