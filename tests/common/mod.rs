#![allow(dead_code)]

use axum::{
    Router,
    extract::RawQuery,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use movie_catalog::application::services::{AuditService, MovieService};
use movie_catalog::infrastructure::catalog::OmdbClient;
use movie_catalog::infrastructure::persistence::PgAuditRepository;
use movie_catalog::state::AppState;
use serde_json::Value;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-key";

/// Canned reply served by the stub catalog.
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// An OMDb stand-in listening on a local port.
pub struct StubCatalog {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubCatalog {
    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// Starts a stub catalog answering every request with `reply`.
pub async fn spawn_stub_catalog(reply: StubReply) -> StubCatalog {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let recorded = queries.clone();

    let app = Router::new().route(
        "/",
        get(move |RawQuery(query): RawQuery| {
            let reply = reply.clone();
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(query.unwrap_or_default());
                tokio::time::sleep(reply.delay).await;
                (
                    reply.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    reply.body,
                )
                    .into_response()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubCatalog {
        base_url: format!("http://{addr}/"),
        queries,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub async fn count_lookups(pool: &PgPool, imdb_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movie_lookups WHERE imdb_id = $1")
        .bind(imdb_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Application state backed by the real audit store and a catalog at `base_url`.
pub fn create_test_state(pool: PgPool, base_url: &str, timeout: Duration) -> AppState {
    let catalog = Arc::new(OmdbClient::new(
        reqwest::Client::new(),
        base_url,
        TEST_API_KEY,
    ));
    let audit_repository = Arc::new(PgAuditRepository::new(Arc::new(pool)));

    AppState::new(
        Arc::new(MovieService::new(catalog, timeout)),
        Arc::new(AuditService::new(audit_repository)),
    )
}
