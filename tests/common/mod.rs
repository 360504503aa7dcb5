#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{TimeZone, Utc};
use snipcli::types::{CreateLinkRequest, ShortLink};
use tokio::sync::Mutex;

/// In-process stand-in for the link-shortener backend.
///
/// Serves the five REST operations the client consumes, keyed by the same
/// identifier the client addresses links with (custom alias preferred over
/// code). Counters and the visited-identifier log let tests assert exactly
/// which requests were issued.
#[derive(Clone)]
pub struct StubBackend {
    links: Arc<Mutex<HashMap<String, ShortLink>>>,
    pub list_calls: Arc<AtomicUsize>,
    pub lookup_calls: Arc<AtomicUsize>,
    pub visit_calls: Arc<AtomicUsize>,
    pub visited: Arc<Mutex<Vec<String>>>,
    lookup_delay: Duration,
    visit_delay: Duration,
    visit_status: StatusCode,
    mutation_status: StatusCode,
    create_seq: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            links: Arc::new(Mutex::new(HashMap::new())),
            list_calls: Arc::new(AtomicUsize::new(0)),
            lookup_calls: Arc::new(AtomicUsize::new(0)),
            visit_calls: Arc::new(AtomicUsize::new(0)),
            visited: Arc::new(Mutex::new(Vec::new())),
            lookup_delay: Duration::ZERO,
            visit_delay: Duration::ZERO,
            visit_status: StatusCode::NO_CONTENT,
            mutation_status: StatusCode::OK,
            create_seq: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_link(self, link: ShortLink) -> Self {
        let key = link.display_ident().to_string();
        // Builder runs before the stub serves; the lock is uncontended.
        self.links.try_lock().unwrap().insert(key, link);
        self
    }

    /// Delays every lookup response, to keep a resolution in flight.
    pub fn lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    /// Delays every visit response, to simulate slow accounting.
    pub fn visit_delay(mut self, delay: Duration) -> Self {
        self.visit_delay = delay;
        self
    }

    /// Makes the visit endpoint answer with this status.
    pub fn visit_status(mut self, status: StatusCode) -> Self {
        self.visit_status = status;
        self
    }

    /// Makes create/delete answer with this status without changing state.
    pub fn mutation_status(mut self, status: StatusCode) -> Self {
        self.mutation_status = status;
        self
    }

    /// Binds the stub to an ephemeral local port and serves it in the
    /// background for the rest of the test.
    pub async fn serve(self) -> (Self, SocketAddr) {
        let app = Router::new()
            .route("/api/links", get(list_handler).post(create_handler))
            .route(
                "/api/links/{identifier}",
                get(lookup_handler).delete(delete_handler),
            )
            .route("/api/links/{identifier}/visit", post(visit_handler))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (self, addr)
    }

    pub async fn contains(&self, identifier: &str) -> bool {
        self.links.lock().await.contains_key(identifier)
    }
}

async fn list_handler(State(stub): State<StubBackend>) -> Json<Vec<ShortLink>> {
    stub.list_calls.fetch_add(1, Ordering::SeqCst);
    let links = stub.links.lock().await.values().cloned().collect();
    Json(links)
}

async fn create_handler(
    State(stub): State<StubBackend>,
    Json(request): Json<CreateLinkRequest>,
) -> impl IntoResponse {
    if stub.mutation_status.is_server_error() || stub.mutation_status.is_client_error() {
        return stub.mutation_status.into_response();
    }

    let seq = stub.create_seq.fetch_add(1, Ordering::SeqCst);
    let link = ShortLink {
        id: format!("id-{}", seq),
        code: format!("code{}", seq),
        custom_name: request.custom_name,
        original_url: request.original_url,
        access_count: Some(0),
        created_at: Utc::now(),
    };
    stub.links
        .lock()
        .await
        .insert(link.display_ident().to_string(), link.clone());
    Json(link).into_response()
}

async fn lookup_handler(
    State(stub): State<StubBackend>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    stub.lookup_calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(stub.lookup_delay).await;

    match stub.links.lock().await.get(&identifier) {
        Some(link) => Json(link.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_handler(
    State(stub): State<StubBackend>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    if stub.mutation_status.is_server_error() || stub.mutation_status.is_client_error() {
        return stub.mutation_status.into_response();
    }

    match stub.links.lock().await.remove(&identifier) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn visit_handler(
    State(stub): State<StubBackend>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    stub.visit_calls.fetch_add(1, Ordering::SeqCst);
    stub.visited.lock().await.push(identifier);
    tokio::time::sleep(stub.visit_delay).await;
    stub.visit_status
}

/// Points the client's configuration at the stub.
///
/// Process environment is ambient state; tests touching it run under
/// `#[serial]`.
pub fn point_client_at(addr: SocketAddr) {
    unsafe {
        std::env::set_var("SNIP_API_URL", format!("http://{}/api", addr));
        std::env::set_var("SNIP_FRONTEND_URL", "https://sho.rt");
    }
}

/// Builds a record like the backend would return.
pub fn make_link(code: &str, custom_name: Option<&str>, original_url: &str) -> ShortLink {
    ShortLink {
        id: format!("{}_id", code),
        code: code.to_string(),
        custom_name: custom_name.map(str::to_string),
        original_url: original_url.to_string(),
        access_count: Some(3),
        created_at: Utc.with_ymd_and_hms(2026, 5, 14, 9, 30, 0).unwrap(),
    }
}
