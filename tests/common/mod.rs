// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use user_directory::config::Config;
use user_directory::Services;

/// Token reqres.in returns for its documented test account.
pub const FIXTURE_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// Check if live tests against reqres.in are enabled.
#[allow(dead_code)]
pub fn live_tests_enabled() -> bool {
    std::env::var("REQRES_LIVE_TESTS").is_ok()
}

/// Skip test with message if live tests are not enabled.
#[macro_export]
macro_rules! require_live {
    () => {
        if !crate::common::live_tests_enabled() {
            eprintln!("⚠️  Skipping: REQRES_LIVE_TESTS not set");
            return;
        }
    };
}

/// Read a JSON fixture from `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

/// How the fixture server answers each endpoint.
#[derive(Clone)]
pub struct FixtureResponses {
    pub login: (StatusCode, String),
    pub user: (StatusCode, String),
    pub users_page: (StatusCode, String),
    /// Held before every response is sent.
    pub delay: Duration,
}

impl Default for FixtureResponses {
    fn default() -> Self {
        Self {
            login: (
                StatusCode::OK,
                format!(r#"{{"token":"{}"}}"#, FIXTURE_TOKEN),
            ),
            user: (StatusCode::OK, fixture("single_user.json")),
            users_page: (StatusCode::OK, fixture("users_page_1.json")),
            delay: Duration::ZERO,
        }
    }
}

/// What the fixture server saw.
#[derive(Default)]
pub struct Recorded {
    pub hits: AtomicUsize,
    pub login_bodies: Mutex<Vec<Value>>,
    pub api_keys: Mutex<Vec<Option<String>>>,
    pub user_ids: Mutex<Vec<String>>,
    pub pages: Mutex<Vec<Option<String>>>,
}

impl Recorded {
    #[allow(dead_code)]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn record(&self, headers: &HeaderMap) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.api_keys.lock().unwrap().push(key);
    }
}

#[derive(Clone)]
struct FixtureState {
    responses: FixtureResponses,
    recorded: Arc<Recorded>,
}

impl FixtureState {
    async fn hold(&self) {
        if !self.responses.delay.is_zero() {
            tokio::time::sleep(self.responses.delay).await;
        }
    }
}

fn json_response((status, body): (StatusCode, String)) -> impl IntoResponse {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

// `Json` rejects requests without `Content-Type: application/json` (415).
async fn login(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.recorded.record(&headers);
    state.recorded.login_bodies.lock().unwrap().push(body);
    state.hold().await;
    json_response(state.responses.login.clone())
}

async fn user(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.recorded.record(&headers);
    state.recorded.user_ids.lock().unwrap().push(id);
    state.hold().await;
    json_response(state.responses.user.clone())
}

async fn users_page(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.recorded.record(&headers);
    state
        .recorded
        .pages
        .lock()
        .unwrap()
        .push(params.get("page").cloned());
    state.hold().await;
    json_response(state.responses.users_page.clone())
}

/// Serve fixtures on an ephemeral local port. Returns the base URL.
#[allow(dead_code)]
pub async fn spawn_fixture_server(responses: FixtureResponses) -> (String, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let state = FixtureState {
        responses,
        recorded: recorded.clone(),
    };

    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/users", get(users_page))
        .route("/api/users/{id}", get(user))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

/// Base URL of a port nothing is listening on.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Build services with a short request timeout.
#[allow(dead_code)]
pub fn services_with_timeout(base_url: &str, timeout: Duration) -> Services {
    let config = Config {
        http_timeout: timeout,
        ..Config::with_base_url(base_url)
    };
    Services::from_config(&config).expect("Failed to build services")
}

/// Build services against a base URL with otherwise default config.
#[allow(dead_code)]
pub fn services_for(base_url: &str) -> Services {
    Services::from_config(&Config::with_base_url(base_url)).expect("Failed to build services")
}
