//! Mock inventory service for exercising the API client end to end.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use stockpile::api::{InventoryRecord, Product};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct ServiceState {
    products: Arc<Mutex<Vec<Product>>>,
    inventory: Arc<Mutex<Vec<InventoryRecord>>>,
    /// When set, the response POST `/inventory` returns instead of echoing
    /// the posted list. Lets tests prove replace-not-append semantics.
    canned_inventory: Arc<Mutex<Option<Vec<InventoryRecord>>>>,
    /// Status to fail the next request with.
    fail_next: Arc<Mutex<Option<u16>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl ServiceState {
    async fn capture(&self, method: &str, path: &str, body: serde_json::Value) {
        self.requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
    }

    async fn take_failure(&self) -> Option<StatusCode> {
        self.fail_next
            .lock()
            .await
            .take()
            .map(|status| StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
    }
}

/// In-memory stand-in for the remote inventory service.
pub struct MockService {
    pub addr: SocketAddr,
    state: ServiceState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockService {
    pub async fn start() -> Self {
        let state = ServiceState {
            products: Arc::new(Mutex::new(Vec::new())),
            inventory: Arc::new(Mutex::new(Vec::new())),
            canned_inventory: Arc::new(Mutex::new(None)),
            fail_next: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/product/all", get(list_products))
            .route("/product", put(create_product))
            .route("/inventory", get(list_inventory).post(replace_inventory))
            .route("/inventory/reset", post(reset_inventory))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for the server to be ready
        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn seed_products(&self, products: Vec<Product>) {
        *self.state.products.lock().await = products;
    }

    pub async fn seed_inventory(&self, inventory: Vec<InventoryRecord>) {
        *self.state.inventory.lock().await = inventory;
    }

    /// Make POST `/inventory` answer with this list regardless of what was
    /// posted.
    pub async fn respond_inventory_with(&self, inventory: Vec<InventoryRecord>) {
        *self.state.canned_inventory.lock().await = Some(inventory);
    }

    /// Fail the next request with the given status.
    pub async fn fail_next(&self, status: u16) {
        *self.state.fail_next.lock().await = Some(status);
    }

    pub async fn products(&self) -> Vec<Product> {
        self.state.products.lock().await.clone()
    }

    pub async fn inventory(&self) -> Vec<InventoryRecord> {
        self.state.inventory.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn list_products(
    State(state): State<ServiceState>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    state
        .capture("GET", "/product/all", serde_json::Value::Null)
        .await;
    if let Some(status) = state.take_failure().await {
        return Err(status);
    }
    Ok(Json(state.products.lock().await.clone()))
}

async fn create_product(
    State(state): State<ServiceState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, StatusCode> {
    state
        .capture(
            "PUT",
            "/product",
            serde_json::to_value(&product).unwrap_or_default(),
        )
        .await;
    if let Some(status) = state.take_failure().await {
        return Err(status);
    }
    state.products.lock().await.push(product.clone());
    Ok(Json(product))
}

async fn list_inventory(
    State(state): State<ServiceState>,
) -> Result<Json<Vec<InventoryRecord>>, StatusCode> {
    state
        .capture("GET", "/inventory", serde_json::Value::Null)
        .await;
    if let Some(status) = state.take_failure().await {
        return Err(status);
    }
    Ok(Json(state.inventory.lock().await.clone()))
}

async fn replace_inventory(
    State(state): State<ServiceState>,
    Json(posted): Json<Vec<InventoryRecord>>,
) -> Result<Json<Vec<InventoryRecord>>, StatusCode> {
    state
        .capture(
            "POST",
            "/inventory",
            serde_json::to_value(&posted).unwrap_or_default(),
        )
        .await;
    if let Some(status) = state.take_failure().await {
        return Err(status);
    }

    let result = match state.canned_inventory.lock().await.take() {
        Some(canned) => canned,
        None => posted,
    };
    *state.inventory.lock().await = result.clone();
    Ok(Json(result))
}

async fn reset_inventory(State(state): State<ServiceState>) -> Result<(), StatusCode> {
    state
        .capture("POST", "/inventory/reset", serde_json::Value::Null)
        .await;
    if let Some(status) = state.take_failure().await {
        return Err(status);
    }
    state.inventory.lock().await.clear();
    Ok(())
}
