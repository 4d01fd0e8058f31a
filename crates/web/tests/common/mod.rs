#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, Response, StatusCode};
use axum::routing;
use axum::{Json, Router};
use folio_feeds::{Feeds, FeedsConfig};
use folio_remote::{ContentClient, RemoteConfig};
use folio_web::config::{ContactChannelKind, ServerConfig};
use folio_web::router::build_app_router;
use folio_web::state::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Contact posts go to the table channel so they can be observed on the
/// fake provider.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        site_owner: "Souhardyo Dey".to_string(),
        contact_channel: ContactChannelKind::Table,
    }
}

// ---------------------------------------------------------------------------
// Fake upstream: provider tables plus every public feed
// ---------------------------------------------------------------------------

/// Shared state of the fake upstream.
///
/// Table reads apply `eq.` filters and `limit` to the stored rows, so one
/// fixture serves list and single-row lookups alike.
#[derive(Clone, Default)]
pub struct Upstream {
    tables: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing: Arc<Mutex<Vec<String>>>,
    inserts: Arc<Mutex<Vec<(String, Value)>>>,
    relay_bodies: Arc<Mutex<Vec<Value>>>,
}

impl Upstream {
    /// Replace the rows of `table`.
    pub fn rows(&self, table: &str, rows: Value) {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => vec![other],
        };
        self.tables.lock().unwrap().insert(table.to_string(), rows);
    }

    /// Make a table or feed route answer 503. Non-table routes are named
    /// `provider` (the REST root), `models`, `photos`, `videos` and `relay`.
    pub fn fail(&self, name: &str) {
        self.failing.lock().unwrap().push(name.to_string());
    }

    pub fn inserts(&self) -> Vec<(String, Value)> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn relay_bodies(&self) -> Vec<Value> {
        self.relay_bodies.lock().unwrap().clone()
    }

    fn is_failing(&self, name: &str) -> bool {
        self.failing.lock().unwrap().iter().any(|n| n == name)
    }

    fn answer(&self, name: &str, body: Value) -> (StatusCode, Json<Value>) {
        if self.is_failing(name) {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"message": "unavailable"})),
            )
        } else {
            (StatusCode::OK, Json(body))
        }
    }
}

fn cell_matches(cell: Option<&Value>, expected: &str) -> bool {
    match cell {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => expected == "null",
        Some(other) => other.to_string() == expected,
    }
}

async fn read_table(
    State(up): State<Upstream>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let rows = up.tables.lock().unwrap().get(&table).cloned().unwrap_or_default();
    let mut rows: Vec<Value> = rows
        .into_iter()
        .filter(|row| {
            params.iter().all(|(column, filter)| match filter.strip_prefix("eq.") {
                Some(expected) => cell_matches(row.get(column), expected),
                None => true,
            })
        })
        .collect();
    if let Some(limit) = params.get("limit").and_then(|l| l.parse::<usize>().ok()) {
        rows.truncate(limit);
    }
    up.answer(&table, Value::Array(rows))
}

async fn write_table(
    State(up): State<Upstream>,
    Path(table): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if up.is_failing(&table) {
        return up.answer(&table, Value::Null);
    }
    up.inserts.lock().unwrap().push((table, body));
    (StatusCode::CREATED, Json(Value::Null))
}

async fn provider_root(State(up): State<Upstream>) -> (StatusCode, Json<Value>) {
    up.answer("provider", json!({"swagger": "2.0"}))
}

async fn models(State(up): State<Upstream>) -> (StatusCode, Json<Value>) {
    up.answer(
        "models",
        json!({"results": [{
            "uid": "m1", "name": "Mech Walker", "viewerUrl": "https://sketchfab.com/3d-models/m1",
            "thumbnails": {"images": [{"url": "small.jpg", "width": 100}, {"url": "large.jpg", "width": 1920}]}
        }]}),
    )
}

async fn photos(State(up): State<Upstream>) -> (StatusCode, Json<Value>) {
    up.answer(
        "photos",
        json!([
            {"id": "p1", "mediaUrl": "https://cdn.example/p1.jpg", "permalink": "https://instagram.com/p/p1", "mediaType": "IMAGE", "caption": "Sunset"},
            {"id": "p2", "mediaUrl": "https://cdn.example/p2.mp4", "permalink": "https://instagram.com/p/p2", "mediaType": "VIDEO"}
        ]),
    )
}

async fn videos(State(up): State<Upstream>) -> (StatusCode, Json<Value>) {
    up.answer(
        "videos",
        json!({"items": [{
            "id": {"videoId": "v1"},
            "snippet": {"title": "Devlog #1", "publishedAt": "2024-05-02T09:00:00Z",
                        "thumbnails": {"high": {"url": "https://cdn.example/v1.jpg"}}}
        }]}),
    )
}

async fn relay(State(up): State<Upstream>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !up.is_failing("relay") {
        up.relay_bodies.lock().unwrap().push(body);
    }
    up.answer("relay", json!("OK"))
}

/// Start the fake upstream on an ephemeral port. Returns it with its base URL.
pub async fn spawn_upstream() -> (Upstream, String) {
    let up = Upstream::default();
    let app = Router::new()
        .route("/rest/v1/", routing::get(provider_root))
        .route("/rest/v1/{table}", routing::get(read_table).post(write_table))
        .route("/v3/search", routing::get(models))
        .route("/feed", routing::get(photos))
        .route("/youtube/v3/search", routing::get(videos))
        .route("/api/v1.0/email/send", routing::post(relay))
        .with_state(up.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (up, format!("http://{addr}"))
}

/// Build the full application router against a fresh fake upstream.
///
/// Uses the production [`build_app_router`] so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub async fn build_test_app() -> (Upstream, Router) {
    build_test_app_with(test_config(), |_| {}).await
}

/// Like [`build_test_app`] with a custom config and feed settings.
pub async fn build_test_app_with(
    config: ServerConfig,
    tweak_feeds: impl FnOnce(&mut FeedsConfig),
) -> (Upstream, Router) {
    let (up, base) = spawn_upstream().await;

    let content = ContentClient::new(&RemoteConfig {
        url: base.clone(),
        anon_key: "test-anon".into(),
        timeout_secs: 5,
    })
    .unwrap();
    let mut feeds_config = FeedsConfig::with_base_url(&base);
    tweak_feeds(&mut feeds_config);
    let feeds = Feeds::new(&feeds_config).unwrap();

    let state = AppState::new(config.clone(), content, feeds);
    (up, build_app_router(state, &config))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with(app, uri, &[]).await
}

pub async fn get_with(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
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

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Every `Set-Cookie` header value on `response`.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn project_row(id: &str, title: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "category": "Game",
        "image": format!("https://cdn.example/{id}.jpg"),
        "description": format!("{title} in short"),
        "full_description": "First paragraph.\n\nSecond paragraph.",
        "technologies": ["Unreal Engine", "C++"],
        "github_link": null,
        "live_link": "https://example.com/play",
        "featured": featured,
        "created_at": "2024-03-15T10:00:00Z"
    })
}

pub fn dsy_studio_row() -> Value {
    json!({
        "slug": "dsy",
        "name": "DSY Studio",
        "role": "Indie Game Studio",
        "logo_url": "https://cdn.example/dsy.png",
        "hero_image_url": "https://cdn.example/dsy-hero.jpg",
        "description_short": "Games",
        "description_long": "We build small, strange games.",
        "website_url": "https://dsy.example",
        "video_url": null,
        "team_members": [
            {"name": "Souhardyo Dey", "role": "Founder", "insta_url": "https://instagram.com/s", "yt_url": null}
        ],
        "upcoming_projects": [{"title": "Project Nova", "desc": "Coming 2025"}],
        "tech_stack": ["Unreal Engine", "Blender"],
        "gallery_images": []
    })
}

pub fn content_row(id: &str, kind: &str, images: &[&str]) -> Value {
    json!({
        "id": id,
        "studio_slug": "dsy",
        "type": kind,
        "title": format!("Release {id}"),
        "description": "A release",
        "images": images,
        "audio_url": if kind == "Music" { json!("https://cdn.example/track.mp3") } else { Value::Null },
        "external_link": "https://store.example/game",
        "created_at": "2024-01-01T00:00:00Z"
    })
}
