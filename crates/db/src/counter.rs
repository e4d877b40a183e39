//! Category asset-count maintenance.
//!
//! Runs after every successful asset insert. The increment itself is a single
//! atomic operation in each backend, so concurrent creations in the same
//! category cannot drop updates. The insert and the increment are still two
//! steps: a failure in between leaves the counter one low, and nothing ever
//! recomputes it.

use crate::models::asset::Asset;
use crate::store::EntityStore;

/// Increment the asset count of `asset`'s category.
///
/// Never fails: a missing category is skipped and a store error is logged,
/// leaving the already-inserted asset in place.
pub async fn record_asset_created<S>(store: &S, asset: &Asset)
where
    S: EntityStore + ?Sized,
{
    match store.increment_asset_count(asset.category_id).await {
        Ok(Some(asset_count)) => {
            tracing::debug!(
                category_id = asset.category_id,
                asset_id = asset.id,
                asset_count,
                "Category asset count incremented",
            );
        }
        Ok(None) => {
            tracing::warn!(
                category_id = asset.category_id,
                asset_id = asset.id,
                "Category not found while incrementing asset count, skipped",
            );
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                category_id = asset.category_id,
                asset_id = asset.id,
                "Failed to increment category asset count",
            );
        }
    }
}
