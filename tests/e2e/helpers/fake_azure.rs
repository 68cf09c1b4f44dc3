use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
pub const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";
pub const FAKE_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.fake-speech-token";

/// Minimal MP3 frame header, enough to tell audio bytes apart from JSON
pub const FAKE_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00];

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

struct FakeAzureState {
    token_status: AtomicU16,
    synthesis_status: AtomicU16,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeAzureState {
    fn record(&self, path: &str, headers: &HeaderMap, body: &Bytes) {
        let headers = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            headers,
            body: body.to_vec(),
        });
    }
}

/// Local stand-in for the Azure Speech token and synthesis endpoints
pub struct FakeAzure {
    pub base_url: String,
    state: Arc<FakeAzureState>,
}

impl FakeAzure {
    pub async fn start() -> Self {
        let state = Arc::new(FakeAzureState {
            token_status: AtomicU16::new(StatusCode::OK.as_u16()),
            synthesis_status: AtomicU16::new(StatusCode::OK.as_u16()),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(TOKEN_PATH, post(issue_token))
            .route(SYNTHESIS_PATH, post(synthesize))
            .layer(DefaultBodyLimit::disable())
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake Azure listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }

    pub fn synthesis_url(&self) -> String {
        format!("{}{}", self.base_url, SYNTHESIS_PATH)
    }

    /// Make the token endpoint answer with `status` from now on
    pub fn respond_to_token_with(&self, status: StatusCode) {
        self.state.token_status.store(status.as_u16(), Ordering::SeqCst);
    }

    /// Make the synthesis endpoint answer with `status` from now on
    pub fn respond_to_synthesis_with(&self, status: StatusCode) {
        self.state
            .synthesis_status
            .store(status.as_u16(), Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

fn configured_status(status: &AtomicU16) -> StatusCode {
    StatusCode::from_u16(status.load(Ordering::SeqCst)).unwrap_or(StatusCode::OK)
}

async fn issue_token(
    State(state): State<Arc<FakeAzureState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(TOKEN_PATH, &headers, &body);

    let status = configured_status(&state.token_status);
    if status.is_success() {
        (status, FAKE_TOKEN).into_response()
    } else {
        (status, "Access denied due to invalid subscription key").into_response()
    }
}

async fn synthesize(
    State(state): State<Arc<FakeAzureState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(SYNTHESIS_PATH, &headers, &body);

    let status = configured_status(&state.synthesis_status);
    if status.is_success() {
        (status, [("content-type", "audio/mpeg")], FAKE_AUDIO).into_response()
    } else {
        (status, "Synthesis failed").into_response()
    }
}
