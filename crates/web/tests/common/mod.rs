#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use holonet_core::character::{Character, SearchPage};
use holonet_core::directory::CharacterDirectory;
use holonet_core::error::DirectoryError;
use tower::ServiceExt;

use holonet_web::config::ServerConfig;
use holonet_web::render::Pages;
use holonet_web::router::build_app_router;
use holonet_web::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        directory_timeout_ms: 10_000,
        swapi_base_url: "http://directory.invalid/api".to_string(),
    }
}

/// Build the full application router around the given directory.
pub fn build_test_app(directory: Arc<dyn CharacterDirectory>) -> Router {
    build_test_app_with(directory, test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with(directory: Arc<dyn CharacterDirectory>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        directory,
        pages: Arc::new(Pages::new().unwrap()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Directory fake
// ---------------------------------------------------------------------------

type Outcome = Box<dyn Fn() -> Result<SearchPage, DirectoryError> + Send + Sync>;

/// In-memory directory that records every query it receives.
pub struct RecordingDirectory {
    outcome: Outcome,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl RecordingDirectory {
    fn build(outcome: Outcome, delay: Option<Duration>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            queries: Mutex::new(Vec::new()),
        })
    }

    fn answer(characters: Vec<Character>) -> Outcome {
        Box::new(move || {
            Ok(SearchPage {
                count: Some(characters.len() as u64),
                results: characters.clone(),
                ..SearchPage::default()
            })
        })
    }

    /// Answers every search with `characters`, in order.
    pub fn with_results(characters: Vec<Character>) -> Arc<Self> {
        Self::build(Self::answer(characters), None)
    }

    /// Answers with `characters`, but only after sleeping for `delay`.
    pub fn answering_after(delay: Duration, characters: Vec<Character>) -> Arc<Self> {
        Self::build(Self::answer(characters), Some(delay))
    }

    /// Fails every search with a transport error carrying `cause`.
    pub fn failing(cause: &'static str) -> Arc<Self> {
        Self::build(
            Box::new(move || Err(DirectoryError::Request(cause.to_string()))),
            None,
        )
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterDirectory for RecordingDirectory {
    async fn search(&self, query: &str) -> Result<SearchPage, DirectoryError> {
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.outcome)()
    }
}

/// A fully populated record for Luke Skywalker.
pub fn luke() -> Character {
    Character {
        height: "172".into(),
        mass: "77".into(),
        hair_color: "blond".into(),
        skin_color: "fair".into(),
        eye_color: "blue".into(),
        birth_year: "19BBY".into(),
        gender: "male".into(),
        homeworld: "https://swapi.dev/api/planets/1/".into(),
        films: vec![
            "https://swapi.dev/api/films/1/".into(),
            "https://swapi.dev/api/films/2/".into(),
        ],
        species: vec![],
        vehicles: vec!["https://swapi.dev/api/vehicles/14/".into()],
        starships: vec!["https://swapi.dev/api/starships/12/".into()],
        ..Character::named("Luke Skywalker")
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Response body as text, with minijinja's escaped slashes restored so
/// assertions can use plain URLs.
pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await)
        .unwrap()
        .replace("&#x2f;", "/")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
