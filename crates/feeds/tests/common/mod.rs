use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use folio_feeds::{Feeds, FeedsConfig};
use serde_json::{json, Value};

/// Shared state of the fake upstream: what each route returns and what it
/// was sent.
#[derive(Clone, Default)]
pub struct Upstream {
    pub fail: Arc<Mutex<Vec<&'static str>>>,
    pub queries: Arc<Mutex<HashMap<&'static str, HashMap<String, String>>>>,
    pub relay_bodies: Arc<Mutex<Vec<Value>>>,
}

impl Upstream {
    pub fn fail(&self, route: &'static str) {
        self.fail.lock().unwrap().push(route);
    }

    pub fn query(&self, route: &'static str) -> HashMap<String, String> {
        self.queries
            .lock()
            .unwrap()
            .get(route)
            .cloned()
            .unwrap_or_default()
    }

    fn answer(&self, route: &'static str, body: Value) -> (StatusCode, Json<Value>) {
        if self.fail.lock().unwrap().contains(&route) {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "unavailable"})),
            )
        } else {
            (StatusCode::OK, Json(body))
        }
    }
}

async fn models(
    State(up): State<Upstream>,
    Query(q): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    up.queries.lock().unwrap().insert("models", q);
    up.answer(
        "models",
        json!({"results": [{
            "uid": "m1", "name": "Mech", "viewerUrl": "https://sketchfab.com/3d-models/m1",
            "thumbnails": {"images": [{"url": "s.jpg", "width": 100}, {"url": "l.jpg", "width": 1920}]}
        }]}),
    )
}

async fn photos(State(up): State<Upstream>) -> (StatusCode, Json<Value>) {
    up.answer(
        "photos",
        json!({"posts": [
            {"id": "p1", "mediaUrl": "p1.jpg", "permalink": "https://instagram.com/p/p1", "mediaType": "IMAGE", "caption": "Sunset"},
            {"id": "p2", "mediaUrl": "p2.mp4", "permalink": "https://instagram.com/p/p2", "mediaType": "VIDEO"}
        ]}),
    )
}

async fn videos(
    State(up): State<Upstream>,
    Query(q): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    up.queries.lock().unwrap().insert("videos", q);
    up.answer(
        "videos",
        json!({"items": [{
            "id": {"videoId": "v1"},
            "snippet": {"title": "Devlog #1", "publishedAt": "2024-05-02T09:00:00Z",
                        "thumbnails": {"high": {"url": "v1.jpg"}}}
        }]}),
    )
}

async fn relay(State(up): State<Upstream>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    up.relay_bodies.lock().unwrap().push(body);
    up.answer("relay", json!("OK"))
}

/// Start a fake upstream serving every feed route and return clients
/// pointed at it.
pub async fn spawn_upstream() -> (Upstream, Feeds) {
    let up = Upstream::default();
    let app = Router::new()
        .route("/v3/search", get(models))
        .route("/feed", get(photos))
        .route("/youtube/v3/search", get(videos))
        .route("/api/v1.0/email/send", post(relay))
        .with_state(up.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let feeds = Feeds::new(&FeedsConfig::with_base_url(&format!("http://{addr}"))).unwrap();
    (up, feeds)
}
