use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use folio_remote::{ContentClient, RemoteConfig};
use serde_json::Value;

/// A request seen by the fake provider.
#[derive(Debug, Clone)]
pub struct Seen {
    pub table: String,
    pub params: HashMap<String, String>,
    pub apikey: Option<String>,
    pub body: Option<Value>,
}

/// Canned responses keyed by table name.
#[derive(Clone, Default)]
pub struct FakeProvider {
    pub responses: Arc<Mutex<HashMap<String, (StatusCode, Value)>>>,
    pub seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeProvider {
    pub fn respond(&self, table: &str, status: StatusCode, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(table.to_string(), (status, body));
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

async fn read_table(
    State(fake): State<FakeProvider>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    record(&fake, &table, params, &headers, None);
    reply(&fake, &table)
}

async fn write_table(
    State(fake): State<FakeProvider>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&fake, &table, HashMap::new(), &headers, Some(body));
    reply(&fake, &table)
}

fn record(
    fake: &FakeProvider,
    table: &str,
    params: HashMap<String, String>,
    headers: &HeaderMap,
    body: Option<Value>,
) {
    fake.seen.lock().unwrap().push(Seen {
        table: table.to_string(),
        params,
        apikey: headers
            .get("apikey")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });
}

fn reply(fake: &FakeProvider, table: &str) -> (StatusCode, Json<Value>) {
    let responses = fake.responses.lock().unwrap();
    match responses.get(table) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (StatusCode::OK, Json(Value::Array(vec![]))),
    }
}

/// Start the fake provider on an ephemeral port and return a client for it.
pub async fn spawn_provider() -> (FakeProvider, ContentClient) {
    let fake = FakeProvider::default();
    let app = Router::new()
        .route("/rest/v1/{table}", get(read_table).post(write_table))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ContentClient::new(&RemoteConfig {
        url: format!("http://{addr}"),
        anon_key: "test-anon".into(),
        timeout_secs: 5,
    })
    .unwrap();
    (fake, client)
}
