//! Route definitions for phrases.
//!
//! Mounted at `/phrases` by `api_routes()`.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::phrases;
use crate::state::AppState;

/// Phrase routes.
///
/// ```text
/// GET    /            -> list_phrases (?category_id)
/// POST   /            -> create_phrase
/// DELETE /{id}        -> delete_phrase
/// PATCH  /{id}/pin    -> toggle_pin
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(phrases::list_phrases).post(phrases::create_phrase))
        .route("/{id}", delete(phrases::delete_phrase))
        .route("/{id}/pin", patch(phrases::toggle_pin))
}
