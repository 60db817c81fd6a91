use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode as SinkStatus;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use seaside_site::config::Config;
use seaside_site::models::ContactSubmission;

/// How the automation webhook behaves for a test app.
#[allow(dead_code)]
pub enum Webhook {
    /// Accepts every call with the given status.
    Sink(SinkStatus),
    /// Nothing listens on the port.
    Unreachable,
}

/// A local stand-in for the automation webhook that records every body.
#[derive(Clone, Default)]
pub struct WebhookSink {
    received: Arc<Mutex<Vec<Value>>>,
}

impl WebhookSink {
    pub fn payloads(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
    pub webhook: WebhookSink,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a page, return (body, status).
    pub async fn get_page(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Post the contact form as a browser would, return (page, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Post a JSON submission, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Every stored lead, newest first.
    pub async fn rows(&self) -> Vec<ContactSubmission> {
        sqlx::query_as::<_, ContactSubmission>(
            "SELECT * FROM contact_submissions ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .expect("Failed to read contact_submissions")
    }
}

/// The worked example from the contact form: every required field set,
/// both optional fields blank.
#[allow(dead_code)]
pub const JANE: [(&str, &str); 7] = [
    ("name", "Jane Doe"),
    ("email", "jane@x.com"),
    ("phone", "+1 555-0100"),
    ("service", "AI Chat Assistant"),
    ("companyName", "Acme"),
    ("problems", ""),
    ("additionalInfo", ""),
];

/// Spawn a test app with a fresh database and a webhook sink answering 200.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Webhook::Sink(SinkStatus::OK), Duration::from_secs(5)).await
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app_with(webhook: Webhook, store_timeout: Duration) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("seaside_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let sink = WebhookSink::default();
    let webhook_url = match webhook {
        Webhook::Sink(status) => spawn_sink(sink.clone(), status).await,
        Webhook::Unreachable => unreachable_url().await,
    };

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        webhook_url,
        max_body_size: 65536,
        store_timeout,
        webhook_timeout: Duration::from_secs(2),
        log_level: "warn".to_string(),
    };

    let app = seaside_site::build_app(pool.clone(), config).expect("Failed to build app");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
        webhook: sink,
    }
}

async fn spawn_sink(sink: WebhookSink, status: SinkStatus) -> String {
    async fn receive(
        State((sink, status)): State<(WebhookSink, SinkStatus)>,
        Json(body): Json<Value>,
    ) -> SinkStatus {
        sink.received.lock().unwrap().push(body);
        status
    }

    let router = Router::new()
        .route("/hook", post(receive))
        .with_state((sink, status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind webhook sink");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Webhook sink failed");
    });

    format!("http://{addr}/hook")
}

/// A URL whose port was just released, so connections are refused.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hook")
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
