//! Repository for the `phrases` table.

use phrasepin_core::phrases::PIN_LIMIT_PER_CATEGORY;
use phrasepin_core::types::DbId;
use sqlx::PgPool;

use crate::models::phrase::{CreatePhrase, Phrase};

/// Column list for phrases queries.
const COLUMNS: &str = "id, text, category_id, pinned, created_at";

/// Outcome of a pin-state update that found its target row.
#[derive(Debug)]
pub enum PinUpdate {
    /// The new pin state was written; holds the updated row.
    Applied(Phrase),
    /// The category already has the maximum number of pinned phrases;
    /// nothing was written.
    LimitReached,
}

/// Provides CRUD and pin operations for phrases.
pub struct PhraseRepo;

impl PhraseRepo {
    /// Create a new phrase, returning the created row.
    ///
    /// New phrases always start with `pinned = false`.
    pub async fn create(pool: &PgPool, input: &CreatePhrase) -> Result<Phrase, sqlx::Error> {
        let query = format!(
            "INSERT INTO phrases (text, category_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Phrase>(&query)
            .bind(&input.text)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// List all phrases in a category, oldest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Phrase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM phrases WHERE category_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Phrase>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Find a phrase by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Phrase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM phrases WHERE id = $1");
        sqlx::query_as::<_, Phrase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count the pinned phrases in a category.
    pub async fn count_pinned(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM phrases WHERE category_id = $1 AND pinned")
                .bind(category_id)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// Set the pin state of a phrase, enforcing the per-category pin limit.
    ///
    /// The limit check and the write happen in a single conditional UPDATE,
    /// so concurrent pin requests cannot jointly exceed the limit: pinning
    /// only succeeds if the category's pinned count (excluding the target
    /// row itself) is below [`PIN_LIMIT_PER_CATEGORY`]. Unpinning is never
    /// blocked.
    ///
    /// Returns `None` if no phrase with this ID exists.
    pub async fn set_pinned(
        pool: &PgPool,
        id: DbId,
        pinned: bool,
    ) -> Result<Option<PinUpdate>, sqlx::Error> {
        let query = format!(
            "UPDATE phrases SET pinned = $2
             WHERE id = $1
               AND (NOT $2 OR (SELECT COUNT(*) FROM phrases p
                               WHERE p.category_id = phrases.category_id
                                 AND p.pinned
                                 AND p.id <> phrases.id) < $3)
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Phrase>(&query)
            .bind(id)
            .bind(pinned)
            .bind(PIN_LIMIT_PER_CATEGORY as i64)
            .fetch_optional(pool)
            .await?;

        if let Some(phrase) = updated {
            return Ok(Some(PinUpdate::Applied(phrase)));
        }

        // The update matched nothing: either the row is missing or the pin
        // limit blocked it. Distinguish the two for the caller.
        match Self::find_by_id(pool, id).await? {
            Some(_) => Ok(Some(PinUpdate::LimitReached)),
            None => Ok(None),
        }
    }

    /// Delete a phrase by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM phrases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
