use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A stored row references a row that does not resolve.
    #[error("Integrity fault: asset {asset_id} references missing {entity} {missing_id}")]
    IntegrityFault {
        asset_id: DbId,
        entity: &'static str,
        missing_id: DbId,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
