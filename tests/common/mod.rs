use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use uuid::Uuid;

use cafe_kiosk_client::{ApiClient, KioskApi};

pub const FIXTURE_TS: &str = "2024-06-01T10:00:00Z";

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone, Default)]
pub struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    payment_override: Arc<Mutex<Option<Value>>>,
}

/// A fake kiosk backend bound to an ephemeral port. It records every
/// request and answers with fixture data shaped like the real service.
pub struct MockServer {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockServer {
    pub fn api(&self) -> KioskApi {
        KioskApi::with_client(self.client())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::from_parts(
            reqwest::Client::new(),
            format!("http://{}/api", self.addr),
        )
    }

    /// Same as `client()` but with an aggressive timeout, for timeout tests.
    pub fn client_with_timeout(&self, timeout: Duration) -> ApiClient {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client should build");
        ApiClient::from_parts(http, format!("http://{}/api", self.addr))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("at least one request should have been recorded")
    }

    /// Replace the canned `POST /payment` response for this server.
    pub fn set_payment_response(&self, value: Value) {
        *self.state.payment_override.lock().expect("lock") = Some(value);
    }
}

pub async fn spawn_mock_server() -> MockServer {
    let state = MockState::default();
    let app = Router::new()
        .fallback(handle)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener should have an addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    MockServer { addr, state }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response {
    let method = request.method().as_str().to_string();
    let uri = request.uri().clone();
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    state.requests.lock().expect("lock").push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        content_type,
        body: body.to_vec(),
    });

    // Deliberately slow endpoint for timeout tests.
    if uri.path().ends_with("/slow") {
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    let (status, payload) = respond(&state, &method, uri.path(), &body);
    (status, Json(payload)).into_response()
}

fn respond(state: &MockState, method: &str, path: &str, body: &[u8]) -> (StatusCode, Value) {
    let path = path.strip_prefix("/api").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("GET", ["categories"]) => (
            StatusCode::OK,
            json!([sample_category(1, "Coffee"), sample_category(2, "Dessert")]),
        ),
        ("POST", ["categories"]) => {
            let name = serde_json::from_slice::<Value>(body)
                .ok()
                .and_then(|payload| payload["name"].as_str().map(String::from))
                .unwrap_or_default();
            (StatusCode::CREATED, sample_category(10, &name))
        }
        ("GET", ["categories", "999"]) => {
            (StatusCode::NOT_FOUND, json!({"error": "Category not found"}))
        }
        ("GET", ["categories", "500"]) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "database unavailable"}),
        ),
        ("GET", ["categories", id]) => {
            (StatusCode::OK, sample_category(parse_id(id), "Coffee"))
        }
        ("PUT", ["categories", id]) => {
            let name = serde_json::from_slice::<Value>(body)
                .ok()
                .and_then(|payload| payload["name"].as_str().map(String::from))
                .unwrap_or_default();
            (StatusCode::OK, sample_category(parse_id(id), &name))
        }
        ("DELETE", ["categories", _]) => (
            StatusCode::OK,
            json!({"message": "Category deleted successfully"}),
        ),
        ("GET", ["categories", id, "menus"]) => {
            let category_id = parse_id(id);
            (
                StatusCode::OK,
                json!([
                    sample_menu(11, category_id, "Americano", 3000),
                    sample_menu(12, category_id, "Latte", 4500),
                ]),
            )
        }
        ("GET", ["menus"]) => (
            StatusCode::OK,
            json!([
                sample_menu(11, 1, "Americano", 3000),
                sample_menu(12, 1, "Latte", 4500),
                sample_menu(21, 2, "Cheesecake", 6500),
            ]),
        ),
        ("POST", ["menus"]) => (StatusCode::CREATED, sample_menu(30, 4, "Latte", 5500)),
        ("GET", ["menus", id]) => {
            let id = parse_id(id);
            (StatusCode::OK, sample_menu(id, 1, "Americano", 3000))
        }
        ("PUT", ["menus", id]) => {
            (StatusCode::OK, sample_menu(parse_id(id), 4, "Latte", 5500))
        }
        ("DELETE", ["menus", _]) => (
            StatusCode::OK,
            json!({"message": "Menu deleted successfully"}),
        ),
        ("GET", ["orders"]) => (
            StatusCode::OK,
            json!([sample_order(1, 9000), sample_order(2, 4500)]),
        ),
        ("GET", ["orders", "period"]) => (
            StatusCode::OK,
            json!({
                "start_date": "2024-01-01",
                "end_date": "2024-01-31",
                "count": 2,
                "orders": [sample_order(1, 9000), sample_order(2, 4500)],
            }),
        ),
        ("GET", ["orders", id]) => (StatusCode::OK, sample_order(parse_id(id), 9000)),
        ("POST", ["orders"]) => {
            let items = serde_json::from_slice::<Value>(body)
                .ok()
                .and_then(|payload| payload["items"].as_array().cloned())
                .unwrap_or_default();
            let order_items: Vec<Value> = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    json!({
                        "id": index as u32 + 1,
                        "order_id": 77,
                        "menu_id": item["menu_id"],
                        "quantity": item["quantity"],
                        "price": 3000,
                        "menu": sample_menu(11, 1, "Americano", 3000),
                    })
                })
                .collect();
            (
                StatusCode::CREATED,
                json!({
                    "id": 77,
                    "total_price": 9000,
                    "created_at": FIXTURE_TS,
                    "updated_at": FIXTURE_TS,
                    "order_items": order_items,
                }),
            )
        }
        ("POST", ["payment"]) => {
            if let Some(canned) = state.payment_override.lock().expect("lock").clone() {
                return (StatusCode::OK, canned);
            }
            let amount = serde_json::from_slice::<Value>(body)
                .ok()
                .and_then(|payload| payload["amount"].as_i64())
                .unwrap_or(0);
            (
                StatusCode::OK,
                json!({
                    "success": true,
                    "message": "Payment confirmed",
                    "details": {
                        "payment_id": Uuid::new_v4().to_string(),
                        "expected_amount": amount,
                        "actual_change": amount,
                        "verified_at": FIXTURE_TS,
                        "elapsed_time": "3s",
                    },
                }),
            )
        }
        _ => (StatusCode::NOT_FOUND, json!({"error": "not found"})),
    }
}

fn parse_id(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

pub fn sample_category(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "created_at": FIXTURE_TS,
        "updated_at": FIXTURE_TS,
    })
}

pub fn sample_menu(id: u32, category_id: u32, name: &str, price: i64) -> Value {
    json!({
        "id": id,
        "category_id": category_id,
        "name": name,
        "price": price,
        "image_url": format!("/uploads/{}.png", id),
        "created_at": FIXTURE_TS,
        "updated_at": FIXTURE_TS,
    })
}

pub fn sample_order(id: u32, total_price: i64) -> Value {
    json!({
        "id": id,
        "total_price": total_price,
        "created_at": FIXTURE_TS,
        "updated_at": FIXTURE_TS,
        "order_items": [
            {
                "id": id * 10,
                "order_id": id,
                "menu_id": 11,
                "quantity": 2,
                "price": 3000,
                "menu": sample_menu(11, 1, "Americano", 3000),
            }
        ],
    })
}
