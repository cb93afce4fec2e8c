#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use position_portal::environment::ProfileConfig;
use position_portal::{ApiConfig, ConfigManager, PortalClient};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct StubState {
    routes: HashMap<(String, String), VecDeque<(u16, String)>>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<StubState>>;

/// In-process stand-in for the positions API. Unstubbed routes answer 404.
pub struct StubApi {
    pub base_url: String,
    state: Shared,
}

impl StubApi {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(StubState::default()));
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Queue a response. The last queued response for a route repeats.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        let text = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.state
            .lock()
            .unwrap()
            .routes
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, text));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn client(&self) -> PortalClient {
        PortalClient::new(&ApiConfig::new(self.base_url.clone(), TEST_API_KEY)).unwrap()
    }

    /// Configuration pointing at this stub, as `main` would resolve it
    pub fn config(&self) -> ConfigManager {
        let base_url = self.base_url.clone();
        ConfigManager::resolve(ProfileConfig::default(), move |key: &str| match key {
            "PORTAL_API_URL" => Some(base_url.clone()),
            "PORTAL_API_KEY" => Some(TEST_API_KEY.to_string()),
            _ => None,
        })
        .unwrap()
    }
}

async fn handle(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let mut state = state.lock().unwrap();

    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    });

    let key = (method.to_string(), uri.path().to_string());
    let (status, text) = match state.routes.get_mut(&key) {
        Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
        Some(queue) => queue.front().cloned().unwrap(),
        None => (404, json!({"error": "not stubbed"}).to_string()),
    };

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        text,
    )
}

// ===== Fixtures =====

pub fn position(id: i64, version: i64, title: &str) -> Value {
    json!({
        "id": id,
        "companyId": 1,
        "positionTitle": title,
        "positionDescription": format!("About {}", title),
        "version": version,
        "timestamp": "2024-07-19T09:00:00Z"
    })
}

pub fn info(id: i64, version: i64, subject: &str, answer: &str) -> Value {
    json!({
        "id": id,
        "positionId": 1001,
        "generatedByUser": false,
        "answeredByHR": true,
        "subject": subject,
        "answer": answer,
        "version": version,
        "timestamp": "2024-07-19T09:00:00Z"
    })
}

pub fn faq(id: i64, version: i64, question: &str, response: Option<&str>) -> Value {
    json!({
        "id": id,
        "positionId": 1001,
        "generatedByUser": true,
        "answeredByHR": response.is_some(),
        "timesAsked": 2,
        "question": question,
        "response": response,
        "version": version,
        "timestamp": "2024-07-19T09:00:00Z"
    })
}

/// Position 1001 with two revisions of each record
pub fn versioned_bundle() -> Value {
    json!({
        "position": [position(1001, 1, "IT Trainer"), position(1001, 2, "IT Trainer - Remote")],
        "positionInfo": [
            info(20, 1, "Hours", "Part time"),
            info(21, 1, "Location", "Glebe"),
            info(20, 2, "Hours", "Full time")
        ],
        "positionFAQs": [
            faq(30, 2, "Is it remote?", Some("Yes")),
            faq(30, 1, "Remote?", None)
        ]
    })
}
