// src/permissions/actor.rs
// =============================================================================
// The current actor: a user plus the roles they hold.
//
// Code that needs "the logged-in user" receives an `&Actor` explicitly, there
// is no global current-user lookup.
// =============================================================================

use crate::entities::{Role, User};

/// System name of the role that bypasses view restrictions.
pub const ADMIN_SYSTEM_ROLE: &str = "admin";

/// Answers capability questions such as "may this actor create shelves?".
pub trait Authorizer {
    fn can(&self, capability: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user: User,
    pub roles: Vec<Role>,
}

impl Actor {
    pub fn new(user: User, roles: Vec<Role>) -> Self {
        Self { user, roles }
    }

    pub fn id(&self) -> u64 {
        self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.roles.iter().any(|role| role.id == role_id)
    }

    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.system_name == ADMIN_SYSTEM_ROLE)
    }
}

impl Authorizer for Actor {
    fn can(&self, capability: &str) -> bool {
        self.is_admin() || self.user.permissions.iter().any(|p| p == capability)
    }
}

#[cfg(test)]
pub(crate) fn test_actor(id: u64, roles: &[(u64, &str, &str)]) -> Actor {
    let roles: Vec<Role> = roles
        .iter()
        .map(|(id, display_name, system_name)| Role {
            id: *id,
            display_name: display_name.to_string(),
            system_name: system_name.to_string(),
        })
        .collect();
    let user = User {
        id,
        name: format!("User {}", id),
        email: String::new(),
        roles: roles.iter().map(|role| role.id).collect(),
        permissions: Vec::new(),
    };
    Actor::new(user, roles)
}
