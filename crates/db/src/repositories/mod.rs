//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. [`crate::postgres::PgStore`]
//! composes them into an [`crate::store::EntityStore`].

pub mod asset_repo;
pub mod category_repo;
pub mod user_repo;

pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
pub use user_repo::UserRepo;
