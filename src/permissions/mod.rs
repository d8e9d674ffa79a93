// src/permissions/mod.rs
// =============================================================================
// Who may see what.
//
// The wiki's permission engine is large; the link operations only need two
// questions answered:
// - may this actor view this page (the "visible" scope)?
// - does this actor hold a named capability (for optional UI actions)?
//
// Submodules:
// - actor: the current user with their roles resolved, and `Authorizer`
// - applicator: draft and role-restriction rules for entities
// =============================================================================

mod actor;
mod applicator;

pub use actor::{Actor, Authorizer, ADMIN_SYSTEM_ROLE};
pub use applicator::PermissionApplicator;

#[cfg(test)]
pub(crate) use actor::test_actor;
