//! Handlers for the search entry page and its form submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use holonet_core::search_form::SearchForm;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Form body posted by the search page.
#[derive(Debug, Deserialize)]
pub struct SearchSubmission {
    #[serde(default)]
    pub name: String,
}

/// GET /
pub async fn search_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.pages.render_search()?))
}

/// POST /search
///
/// A non-empty name redirects (303) to the detail page. An empty one answers
/// `204 No Content`, which leaves the browser on the current page.
pub async fn submit_search(Form(submission): Form<SearchSubmission>) -> Response {
    let mut form = SearchForm::new();
    form.on_input(submission.name);

    match form.submit() {
        Some(navigation) => Redirect::to(navigation.location()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
