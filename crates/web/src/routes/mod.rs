pub mod health;

use axum::routing::{get, post};
use axum::Router;
use holonet_core::navigation::{DETAIL_PATH, SEARCH_PATH};

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                  search entry page
/// /search            search form submission (POST)
/// /character?name=   character detail page
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(SEARCH_PATH, get(handlers::search::search_page))
        .route("/search", post(handlers::search::submit_search))
        .route(DETAIL_PATH, get(handlers::character::character_detail))
}
