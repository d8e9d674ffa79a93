use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Role ids allowed to view the book and everything in it.
    #[serde(default)]
    pub view_roles: Option<Vec<u64>>,
}
