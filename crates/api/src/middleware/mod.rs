//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the user named by a JWT Bearer token.
//! - [`rbac::RequireCreator`] -- Requires `is_creator`.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
