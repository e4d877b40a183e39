//! Asset catalog models, views, and DTOs.

use creatorhub_core::catalog::{matches_search, AssetOrder};
use creatorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::category::CategorySummary;
use super::user::User;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `assets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub preview_url: String,
    pub price: f64,
    pub category_id: DbId,
    pub creator_id: DbId,
    pub created_at: Timestamp,
    pub tags: Vec<String>,
    pub featured: bool,
    pub thumbnails: Vec<String>,
    pub download_count: i64,
    pub rating: f64,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Public creator fields embedded in asset views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorSummary {
    pub id: DbId,
    pub display_name: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for CreatorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// An asset joined with its creator and category projections.
///
/// Serialized flat: every asset column plus `creator` and `category` objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetWithDetails {
    #[serde(flatten)]
    pub asset: Asset,
    pub creator: CreatorSummary,
    pub category: CategorySummary,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Row filters for asset listings. All fields are optional and AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetFilter {
    pub category_id: Option<DbId>,
    pub creator_id: Option<DbId>,
    pub featured: Option<bool>,
}

/// Full asset query handed to an entity store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetQuery {
    pub filter: AssetFilter,
    /// Lower-cased search needle, matched against title, description and tags.
    pub search: Option<String>,
    pub order: AssetOrder,
    /// Applied after filtering and ordering.
    pub limit: Option<i64>,
}

impl AssetQuery {
    /// Whether `asset` passes the filters and search needle.
    pub fn matches(&self, asset: &Asset) -> bool {
        let f = &self.filter;
        f.category_id.map_or(true, |id| asset.category_id == id)
            && f.creator_id.map_or(true, |id| asset.creator_id == id)
            && f.featured.map_or(true, |featured| asset.featured == featured)
            && self.search.as_deref().map_or(true, |needle| {
                matches_search(
                    needle,
                    &asset.title,
                    asset.description.as_deref(),
                    &asset.tags,
                )
            })
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for publishing a new asset. The creator is supplied separately.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub preview_url: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
    pub category_id: DbId,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub thumbnails: Option<Vec<String>>,
}
