//! In-process stand-in for the remote word store.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        Mutex,
    },
    time::{
        Duration,
        Instant,
    },
};

use axum::{
    extract::{
        Path,
        State,
    },
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
    routing::{
        get,
        put,
    },
    Json,
    Router,
};
use serde_json::{
    json,
    Value,
};
use tokio::{
    net::TcpListener,
    runtime::Runtime,
};
use wordbook::core::WordRecord;

#[derive(Default)]
pub struct MockState {
    pub words: Vec<WordRecord>,
    pub next_id: u32,
    /// When set, every request fails with this status.
    pub fail_with: Option<u16>,
    /// Holds every `GET /words` response back this long.
    pub fetch_delay: Option<Duration>,
    pub created_bodies: Vec<Value>,
    pub updated_bodies: Vec<Value>,
}

pub type Shared = Arc<Mutex<MockState>>;

pub fn word(id: &str, word: &str, definition: &str) -> WordRecord {
    WordRecord {
        id: id.to_string(),
        word: word.to_string(),
        definition: definition.to_string(),
        image_url: String::new(),
        video_url: String::new(),
    }
}

pub fn seeded(words: Vec<WordRecord>) -> Shared {
    let next_id = words.len() as u32 + 1;
    Arc::new(Mutex::new(MockState { words, next_id, ..Default::default() }))
}

fn failure(state: &MockState) -> Option<Response> {
    state.fail_with.map(|code| {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "message": "database unavailable" }))).into_response()
    })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Word not found" }))).into_response()
}

fn text(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

async fn list_words(State(state): State<Shared>) -> Response {
    let (response, delay) = {
        let state = state.lock().unwrap();
        let response = failure(&state)
            .unwrap_or_else(|| Json(json!({ "words": state.words })).into_response());
        (response, state.fetch_delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    response
}

async fn create_word(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(resp) = failure(&state) {
        return resp;
    }

    let record = WordRecord {
        id: state.next_id.to_string(),
        word: text(&body, "word").unwrap_or_default(),
        definition: text(&body, "definition").unwrap_or_default(),
        image_url: text(&body, "imageUrl").unwrap_or_default(),
        video_url: text(&body, "videoUrl").unwrap_or_default(),
    };
    state.next_id += 1;
    state.created_bodies.push(body);
    state.words.push(record.clone());

    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update_word(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(resp) = failure(&state) {
        return resp;
    }
    state.updated_bodies.push(body.clone());

    let Some(record) = state.words.iter_mut().find(|w| w.id == id) else {
        return not_found();
    };

    if let Some(v) = text(&body, "word") {
        record.word = v;
    }
    if let Some(v) = text(&body, "definition") {
        record.definition = v;
    }
    if let Some(v) = text(&body, "imageUrl") {
        record.image_url = v;
    }
    if let Some(v) = text(&body, "videoUrl") {
        record.video_url = v;
    }

    Json(record.clone()).into_response()
}

async fn delete_word(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(resp) = failure(&state) {
        return resp;
    }

    let before = state.words.len();
    state.words.retain(|w| w.id != id);
    if state.words.len() == before {
        return not_found();
    }

    Json(json!({ "message": "Word deleted" })).into_response()
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/words", get(list_words).post(create_word))
        .route("/words/:id", put(update_word).delete(delete_word))
        .with_state(state)
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}/words", addr)
}

/// Serves on the current tokio runtime.
pub async fn spawn(state: Shared) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Serves from its own runtime, for tests that are not async themselves.
pub struct BlockingServer {
    _runtime: Runtime,
    pub addr: SocketAddr,
    pub state: Shared,
}

impl BlockingServer {
    pub fn start(state: Shared) -> Self {
        let runtime = Runtime::new().unwrap();
        let addr = runtime.block_on(spawn(state.clone()));
        Self { _runtime: runtime, addr, state }
    }

    pub fn base_url(&self) -> String {
        base_url(self.addr)
    }
}

/// Polls `condition` until it holds or five seconds pass.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}
