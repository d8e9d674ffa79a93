use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub display_name: String,
    /// Built-in roles carry a system name such as "admin".
    #[serde(default)]
    pub system_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Ids of the roles the user holds.
    #[serde(default)]
    pub roles: Vec<u64>,
    /// Capability names granted to the user, e.g. "bookshelf-create-all".
    #[serde(default)]
    pub permissions: Vec<String>,
}
