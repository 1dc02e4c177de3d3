//! Handlers for category CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use phrasepin_core::categories::{validate_icon, validate_label};
use phrasepin_core::error::CoreError;
use phrasepin_core::types::DbId;
use phrasepin_db::models::category::CreateCategory;
use phrasepin_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
///
/// List all categories.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /categories
///
/// Create a new category. A duplicate label yields 409.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_label(&input.label).map_err(CoreError::Validation)?;
    validate_icon(&input.icon).map_err(CoreError::Validation)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        label = %category.label,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /categories/{id}
///
/// Delete a category and, via the FK cascade, all of its phrases.
/// Deleting a nonexistent id is a no-op success.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(category_id = id, "Category deleted");
    } else {
        tracing::debug!(category_id = id, "Delete of missing category was a no-op");
    }

    Ok(StatusCode::NO_CONTENT)
}
