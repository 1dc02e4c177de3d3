//! Handlers for phrase CRUD and pinning.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use phrasepin_core::error::CoreError;
use phrasepin_core::phrases::{validate_phrase_text, PIN_LIMIT_PER_CATEGORY};
use phrasepin_core::types::DbId;
use phrasepin_db::models::phrase::CreatePhrase;
use phrasepin_db::repositories::{CategoryRepo, PhraseRepo, PinUpdate};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing phrases.
#[derive(Debug, serde::Deserialize)]
pub struct PhraseListParams {
    pub category_id: DbId,
}

/// Body for the pin-toggle endpoint.
///
/// Carries the caller's view of the CURRENT pin state; the server applies
/// the negation. This mirrors the toggle contract the views rely on.
#[derive(Debug, serde::Deserialize)]
pub struct TogglePin {
    pub pinned: bool,
}

/// GET /phrases?category_id=
///
/// List all phrases in a category.
pub async fn list_phrases(
    State(state): State<AppState>,
    Query(params): Query<PhraseListParams>,
) -> AppResult<impl IntoResponse> {
    let phrases = PhraseRepo::list_by_category(&state.pool, params.category_id).await?;
    Ok(Json(DataResponse { data: phrases }))
}

/// POST /phrases
///
/// Create a new phrase in a category. New phrases always start unpinned.
pub async fn create_phrase(
    State(state): State<AppState>,
    Json(input): Json<CreatePhrase>,
) -> AppResult<impl IntoResponse> {
    validate_phrase_text(&input.text).map_err(CoreError::Validation)?;

    // Resolve the category up front so a bad id reads as a validation
    // failure instead of a raw FK violation.
    if CategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .is_none()
    {
        return Err(CoreError::Validation(format!(
            "No category with id {} exists",
            input.category_id
        ))
        .into());
    }

    let phrase = PhraseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        phrase_id = phrase.id,
        category_id = phrase.category_id,
        "Phrase created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: phrase })))
}

/// PATCH /phrases/{id}/pin
///
/// Toggle the pinned state of a phrase. The body carries the current pin
/// state and the server writes the negation; when pinning, the per-category
/// limit is enforced atomically inside the update statement.
pub async fn toggle_pin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TogglePin>,
) -> AppResult<impl IntoResponse> {
    let desired = !input.pinned;

    let outcome = PhraseRepo::set_pinned(&state.pool, id, desired)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Phrase",
            id,
        })?;

    match outcome {
        PinUpdate::Applied(phrase) => {
            tracing::info!(
                phrase_id = id,
                category_id = phrase.category_id,
                pinned = phrase.pinned,
                "Phrase pin toggled"
            );
            Ok(Json(DataResponse { data: phrase }))
        }
        PinUpdate::LimitReached => {
            // The update found the row, so the lookup below only fails if
            // the phrase was deleted in between; treat that as not found.
            let phrase = PhraseRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Phrase",
                    id,
                })?;
            Err(CoreError::PinLimit {
                category_id: phrase.category_id,
                limit: PIN_LIMIT_PER_CATEGORY,
            }
            .into())
        }
    }
}

/// DELETE /phrases/{id}
///
/// Delete a phrase. Deleting a nonexistent id is a no-op success.
pub async fn delete_phrase(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhraseRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(phrase_id = id, "Phrase deleted");
    } else {
        tracing::debug!(phrase_id = id, "Delete of missing phrase was a no-op");
    }

    Ok(StatusCode::NO_CONTENT)
}
