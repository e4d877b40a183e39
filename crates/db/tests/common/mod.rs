#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use creatorhub_core::types::{DbId, Timestamp};
use creatorhub_db::memory::{Clock, MemStore};
use creatorhub_db::models::asset::{Asset, CreateAsset};
use creatorhub_db::models::category::{Category, CreateCategory};
use creatorhub_db::models::user::{CreateUser, User};
use creatorhub_db::EntityStore;

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

pub fn epoch() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Every row gets the same timestamp.
pub fn frozen_clock() -> Clock {
    Arc::new(epoch)
}

/// Each call is one second later than the previous one.
pub fn ticking_clock() -> Clock {
    let tick = Arc::new(AtomicI64::new(0));
    Arc::new(move || epoch() + Duration::seconds(tick.fetch_add(1, Ordering::SeqCst)))
}

// ---------------------------------------------------------------------------
// DTO builders
// ---------------------------------------------------------------------------

pub fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: None,
        icon_name: "ri-image-line".to_string(),
    }
}

pub fn new_user(username: &str, is_creator: bool) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        display_name: format!("{username} display"),
        bio: None,
        avatar_url: None,
        is_creator: Some(is_creator),
    }
}

pub fn new_asset(title: &str, category_id: DbId) -> CreateAsset {
    CreateAsset {
        title: title.to_string(),
        description: None,
        preview_url: format!("https://cdn.example.com/{title}.png"),
        price: 10.0,
        category_id,
        tags: None,
        featured: None,
        thumbnails: None,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A store holding one category and one creator.
pub struct Fixture {
    pub store: Arc<MemStore>,
    pub category: Category,
    pub creator: User,
}

impl Fixture {
    pub async fn new(clock: Clock) -> Self {
        let store = Arc::new(MemStore::with_clock(clock));
        let category = store
            .create_category(&new_category("Graphics"))
            .await
            .unwrap();
        let creator = store
            .create_user(&new_user("designpro", true))
            .await
            .unwrap();
        Self {
            store,
            category,
            creator,
        }
    }

    pub async fn asset(&self, input: CreateAsset) -> Asset {
        self.store.create_asset(self.creator.id, &input).await.unwrap()
    }

    pub async fn titled(&self, title: &str) -> Asset {
        self.asset(new_asset(title, self.category.id)).await
    }

    pub fn catalog(&self) -> creatorhub_db::Catalog {
        creatorhub_db::Catalog::new(self.store.clone())
    }
}
