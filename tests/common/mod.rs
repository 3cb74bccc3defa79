//! Shared HTTP test harness
//!
//! Serves the real router on an ephemeral port, backed by the in-memory
//! store, and drives it with reqwest.

use std::sync::Arc;

use serde_json::Value;
use tokio::net::TcpListener;

use stock_service::gateway::{build_router, state::AppState};
use stock_service::order::{MemoryProductStore, OrderService};

#[allow(dead_code)]
pub struct TestServer {
    pub base: String,
    pub store: Arc<MemoryProductStore>,
    client: reqwest::Client,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn start() -> Self {
        let store = Arc::new(MemoryProductStore::new());
        let state = Arc::new(AppState::new(OrderService::new(store.clone()), None));
        let app = build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            store,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(format!("{}{}", self.base, path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        (status, body)
    }
}
