//! Query parameter types shared by the listing handlers.

use creatorhub_core::types::DbId;
use creatorhub_db::models::asset::AssetFilter;
use serde::Deserialize;

/// `?limit=` on showcase and creator listings.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?limit=&category_id=&creator_id=&featured=` on `GET /assets`.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    pub limit: Option<i64>,
    pub category_id: Option<DbId>,
    pub creator_id: Option<DbId>,
    pub featured: Option<bool>,
}

impl AssetListParams {
    pub fn filter(&self) -> AssetFilter {
        AssetFilter {
            category_id: self.category_id,
            creator_id: self.creator_id,
            featured: self.featured,
        }
    }
}

/// `?q=` on `GET /assets/search`. A missing `q` is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
