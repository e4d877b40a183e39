//! PostgreSQL entity store built on the repository layer.

use async_trait::async_trait;
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;

use crate::models::asset::{Asset, AssetQuery, CreateAsset};
use crate::models::category::{Category, CreateCategory};
use crate::models::user::{CreateUser, User};
use crate::repositories::{AssetRepo, CategoryRepo, UserRepo};
use crate::store::{EntityStore, StoreError, StoreResult};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Entity store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Turn a unique-constraint violation into [`CoreError::Conflict`]; pass
/// every other error through.
fn map_unique_violation(err: sqlx::Error, message: impl FnOnce() -> String) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return CoreError::Conflict(message()).into();
        }
    }
    err.into()
}

#[async_trait]
impl EntityStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        UserRepo::create(&self.pool, input).await.map_err(|e| {
            map_unique_violation(e, || {
                format!("Username '{}' is already taken", input.username)
            })
        })
    }

    async fn list_creators(&self, limit: Option<i64>) -> StoreResult<Vec<User>> {
        Ok(UserRepo::list_creators(&self.pool, limit).await?)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        CategoryRepo::create(&self.pool, input).await.map_err(|e| {
            map_unique_violation(e, || format!("Category '{}' already exists", input.name))
        })
    }

    async fn increment_asset_count(&self, category_id: DbId) -> StoreResult<Option<i64>> {
        Ok(CategoryRepo::increment_asset_count(&self.pool, category_id).await?)
    }

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>> {
        Ok(AssetRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_asset(&self, creator_id: DbId, input: &CreateAsset) -> StoreResult<Asset> {
        Ok(AssetRepo::create(&self.pool, creator_id, input).await?)
    }

    async fn query_assets(&self, query: &AssetQuery) -> StoreResult<Vec<Asset>> {
        Ok(AssetRepo::query(&self.pool, query).await?)
    }
}
