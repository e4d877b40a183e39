//! In-memory entity store.
//!
//! Each entity type lives in its own arena: a growable `Vec` guarded by a
//! `RwLock`. Rows are never removed, so a row's id is always its arena index
//! plus one and ids grow monotonically. Used when no `DATABASE_URL` is
//! configured and throughout the test suites.
//!
//! Unlike PostgreSQL, `insert_asset` does not enforce foreign keys. The
//! provided [`EntityStore::create_asset`] checks references before inserting.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use creatorhub_core::catalog::{apply_limit, sort_desc_stable, AssetOrder};
use creatorhub_core::error::CoreError;
use creatorhub_core::types::{DbId, Timestamp};

use crate::models::asset::{Asset, AssetQuery, CreateAsset};
use crate::models::category::{Category, CreateCategory};
use crate::models::user::{CreateUser, User};
use crate::store::{EntityStore, StoreResult};

/// Source of `joined_at` / `created_at` timestamps.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Append-only row storage for one entity type.
#[derive(Debug)]
struct Arena<T> {
    rows: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> Arena<T> {
    fn next_id(&self) -> DbId {
        DbId::try_from(self.rows.len()).unwrap_or(DbId::MAX - 1) + 1
    }

    fn index_of(id: DbId) -> Option<usize> {
        usize::try_from(id).ok()?.checked_sub(1)
    }

    fn get(&self, id: DbId) -> Option<&T> {
        Self::index_of(id).and_then(|i| self.rows.get(i))
    }

    fn get_mut(&mut self, id: DbId) -> Option<&mut T> {
        Self::index_of(id).and_then(|i| self.rows.get_mut(i))
    }
}

/// Entity store backed by process memory.
pub struct MemStore {
    users: RwLock<Arena<User>>,
    categories: RwLock<Arena<Category>>,
    assets: RwLock<Arena<Asset>>,
    clock: Clock,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create an empty store stamping rows with the current UTC time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Create an empty store that stamps rows using `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            users: RwLock::default(),
            categories: RwLock::default(),
            assets: RwLock::default(),
            clock,
        }
    }

    /// Overwrite an asset's download counter.
    ///
    /// Downloads are recorded outside this system; tests use this to stand in
    /// for that collaborator.
    #[cfg(feature = "test-support")]
    pub fn set_download_count(&self, asset_id: DbId, download_count: i64) -> StoreResult<bool> {
        let mut assets = write(&self.assets)?;
        Ok(match assets.get_mut(asset_id) {
            Some(asset) => {
                asset.download_count = download_count;
                true
            }
            None => false,
        })
    }
}

fn read<T>(lock: &RwLock<T>) -> StoreResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| CoreError::Internal("in-memory store lock poisoned".into()).into())
}

fn write<T>(lock: &RwLock<T>) -> StoreResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| CoreError::Internal("in-memory store lock poisoned".into()).into())
}

#[async_trait]
impl EntityStore for MemStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?
            .rows
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut users = write(&self.users)?;
        if users.rows.iter().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            ))
            .into());
        }

        let user = User {
            id: users.next_id(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            display_name: input.display_name.clone(),
            bio: input.bio.clone(),
            avatar_url: input.avatar_url.clone(),
            is_creator: input.is_creator.unwrap_or(false),
            joined_at: (self.clock)(),
        };
        users.rows.push(user.clone());
        Ok(user)
    }

    async fn list_creators(&self, limit: Option<i64>) -> StoreResult<Vec<User>> {
        let mut creators: Vec<User> = read(&self.users)?
            .rows
            .iter()
            .filter(|u| u.is_creator)
            .cloned()
            .collect();
        apply_limit(&mut creators, limit);
        Ok(creators)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(read(&self.categories)?.rows.clone())
    }

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(read(&self.categories)?.get(id).cloned())
    }

    async fn insert_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let mut categories = write(&self.categories)?;
        if categories.rows.iter().any(|c| c.name == input.name) {
            return Err(CoreError::Conflict(format!(
                "Category '{}' already exists",
                input.name
            ))
            .into());
        }

        let category = Category {
            id: categories.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            icon_name: input.icon_name.clone(),
            asset_count: 0,
        };
        categories.rows.push(category.clone());
        Ok(category)
    }

    async fn increment_asset_count(&self, category_id: DbId) -> StoreResult<Option<i64>> {
        // Read and write happen under one write guard.
        let mut categories = write(&self.categories)?;
        Ok(categories.get_mut(category_id).map(|category| {
            category.asset_count += 1;
            category.asset_count
        }))
    }

    async fn get_asset(&self, id: DbId) -> StoreResult<Option<Asset>> {
        Ok(read(&self.assets)?.get(id).cloned())
    }

    async fn insert_asset(&self, creator_id: DbId, input: &CreateAsset) -> StoreResult<Asset> {
        let mut assets = write(&self.assets)?;
        let asset = Asset {
            id: assets.next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            preview_url: input.preview_url.clone(),
            price: input.price,
            category_id: input.category_id,
            creator_id,
            created_at: (self.clock)(),
            tags: input.tags.clone().unwrap_or_default(),
            featured: input.featured.unwrap_or(false),
            thumbnails: input.thumbnails.clone().unwrap_or_default(),
            download_count: 0,
            rating: 0.0,
        };
        assets.rows.push(asset.clone());
        Ok(asset)
    }

    async fn query_assets(&self, query: &AssetQuery) -> StoreResult<Vec<Asset>> {
        let mut rows: Vec<Asset> = read(&self.assets)?
            .rows
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();

        match query.order {
            AssetOrder::Insertion => {}
            AssetOrder::Newest => sort_desc_stable(&mut rows, |a| a.created_at),
            AssetOrder::MostDownloaded => sort_desc_stable(&mut rows, |a| a.download_count),
        }

        apply_limit(&mut rows, query.limit);
        Ok(rows)
    }
}
