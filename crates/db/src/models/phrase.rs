//! Phrase model.

use phrasepin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `phrases` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Phrase {
    pub id: DbId,
    pub text: String,
    pub category_id: DbId,
    pub pinned: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new phrase.
///
/// New phrases always start unpinned; there is no `pinned` field here on
/// purpose.
#[derive(Debug, Deserialize)]
pub struct CreatePhrase {
    pub text: String,
    pub category_id: DbId,
}
