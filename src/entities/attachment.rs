use serde::{Deserialize, Serialize};

/// A file or external link uploaded to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub extension: String,
    /// Id of the page the attachment belongs to.
    pub uploaded_to: u64,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub external: bool,
}
