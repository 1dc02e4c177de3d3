use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Pin limit reached: category {category_id} already has {limit} pinned phrases")]
    PinLimit { category_id: DbId, limit: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}
