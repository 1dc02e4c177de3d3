pub mod categories;
pub mod health;
pub mod phrases;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/{id}            delete (cascades to phrases)
///
/// /phrases                    list (?category_id), create
/// /phrases/{id}               delete
/// /phrases/{id}/pin           toggle pin (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/phrases", phrases::router())
}
