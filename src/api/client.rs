use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiOp};
use crate::api::types::{InventoryRecord, Product};
use crate::config::ApiConfig;

/// Typed client for the remote inventory service.
///
/// One method per endpoint; no retries, no caching. The server is the
/// source of truth for ordering and shape of everything it returns.
#[derive(Clone)]
pub struct InventoryApi {
    client: Client,
    base_url: String,
}

impl InventoryApi {
    /// Build a client with the configured timeouts.
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/product/all`: every product known to the service.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url("/product/all");
        self.expect_json(ApiOp::ListProducts, self.client.get(&url), url)
            .await
    }

    /// PUT `/product`: create a product; returns the created product.
    pub async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        let url = self.url("/product");
        self.expect_json(
            ApiOp::CreateProduct,
            self.client.put(&url).json(product),
            url,
        )
        .await
    }

    /// GET `/inventory`: the current inventory list.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, ApiError> {
        let url = self.url("/inventory");
        self.expect_json(ApiOp::ListInventory, self.client.get(&url), url)
            .await
    }

    /// POST `/inventory`: whole-collection write.
    ///
    /// The body is the full desired list (current inventory plus the new
    /// entry); the response is the resulting list and must replace local
    /// state wholesale.
    pub async fn replace_inventory(
        &self,
        inventory: &[InventoryRecord],
    ) -> Result<Vec<InventoryRecord>, ApiError> {
        let url = self.url("/inventory");
        self.expect_json(
            ApiOp::AddInventory,
            self.client.post(&url).json(&inventory),
            url,
        )
        .await
    }

    /// POST `/inventory/reset`: clear the inventory. Response body ignored.
    pub async fn reset_inventory(&self) -> Result<(), ApiError> {
        let op = ApiOp::ResetInventory;
        let url = self.url("/inventory/reset");
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { op, url, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { op, status });
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect_json<T: DeserializeOwned>(
        &self,
        op: ApiOp,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { op, url, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { op, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { op, source })
    }
}
