//! Handler for the character detail page.

use axum::extract::{Query, State};
use axum::response::Html;
use holonet_core::detail::resolve_detail;
use holonet_core::navigation::NAME_PARAM;
use holonet_core::view::DetailView;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /character
///
/// Reads the first `name` parameter; anything else in the query is ignored.
/// Always answers 200 with a page: the character, or an error view with a
/// link back to the search.
pub async fn character_detail(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let name = params
        .iter()
        .find(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str());

    let result = resolve_detail(
        state.directory.as_ref(),
        name,
        state.config.directory_timeout(),
    )
    .await;
    let view = DetailView::from_result(&result);

    Ok(Html(state.pages.render_detail(&view)?))
}
