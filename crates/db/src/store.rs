//! The entity store port.
//!
//! [`EntityStore`] is the only way the catalog and the HTTP layer reach
//! persisted rows. Two backends implement it: [`crate::postgres::PgStore`]
//! and [`crate::memory::MemStore`]. Backends supply the raw `insert_*` and
//! lookup primitives; the `create_*` methods are provided here so validation
//! and count maintenance behave identically everywhere.
//!
//! The store is append-only. There is no update or delete path for any
//! entity; the only in-place mutation is the category asset counter.

use async_trait::async_trait;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_core::validation::validate_input;

use crate::counter;
use crate::models::asset::{Asset, AssetQuery, CreateAsset};
use crate::models::category::{Category, CreateCategory};
use crate::models::user::{CreateUser, User};

/// Errors surfaced by any entity store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A typed domain failure (not found, validation, conflict, integrity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unclassified database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Check that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Insert a validated user row. Duplicate usernames yield
    /// [`CoreError::Conflict`].
    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User>;

    /// Users with `is_creator = true`, in insertion order.
    async fn list_creators(&self, limit: Option<i64>) -> StoreResult<Vec<User>>;

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// All categories in insertion order.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>>;

    /// Insert a validated category row with `asset_count = 0`. Duplicate names
    /// yield [`CoreError::Conflict`].
    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category>;

    /// Atomically add one to a category's `asset_count`.
    ///
    /// Returns the new count, or `None` when the category does not exist.
    async fn increment_asset_count(&self, category_id: DbId) -> StoreResult<Option<i64>>;

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>>;

    /// Insert an asset row without touching the category counter.
    async fn insert_asset(&self, creator_id: DbId, input: &CreateAsset) -> StoreResult<Asset>;

    /// Filter, order, and truncate asset rows.
    async fn query_assets(&self, query: &AssetQuery) -> StoreResult<Vec<Asset>>;

    // -----------------------------------------------------------------------
    // Provided operations
    // -----------------------------------------------------------------------

    /// Validate and insert a user. `password_hash` must already be hashed.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        validate_input(input)?;
        let user = self.insert_user(input).await?;
        tracing::info!(
            user_id = user.id,
            username = %user.username,
            is_creator = user.is_creator,
            backend = self.backend(),
            "User created",
        );
        Ok(user)
    }

    /// Validate and insert a category.
    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        validate_input(input)?;
        let category = self.insert_category(input).await?;
        tracing::info!(
            category_id = category.id,
            name = %category.name,
            backend = self.backend(),
            "Category created",
        );
        Ok(category)
    }

    /// Validate and insert an asset, then bump its category's counter.
    ///
    /// Both referenced rows must exist at insert time. A counter failure after
    /// the insert is logged and does not fail the call.
    async fn create_asset(&self, creator_id: DbId, input: &CreateAsset) -> StoreResult<Asset> {
        validate_input(input)?;

        if self.get_user(creator_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "creator_id: user {creator_id} does not exist"
            ))
            .into());
        }
        if self.get_category(input.category_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "category_id: category {} does not exist",
                input.category_id
            ))
            .into());
        }

        let asset = self.insert_asset(creator_id, input).await?;
        tracing::info!(
            asset_id = asset.id,
            title = %asset.title,
            category_id = asset.category_id,
            creator_id = asset.creator_id,
            backend = self.backend(),
            "Asset created",
        );

        counter::record_asset_created(self, &asset).await;
        Ok(asset)
    }
}
