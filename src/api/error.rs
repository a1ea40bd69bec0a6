use std::fmt;

use thiserror::Error;

/// The remote operations this client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOp {
    ListProducts,
    CreateProduct,
    ListInventory,
    AddInventory,
    ResetInventory,
}

impl fmt::Display for ApiOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOp::ListProducts => "list products",
            ApiOp::CreateProduct => "create product",
            ApiOp::ListInventory => "list inventory",
            ApiOp::AddInventory => "add inventory",
            ApiOp::ResetInventory => "reset inventory",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when talking to the inventory service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("{op} request to {url} failed: {source}")]
    Transport {
        op: ApiOp,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{op} returned HTTP {status}")]
    Status { op: ApiOp, status: reqwest::StatusCode },

    /// The response body did not match the expected shape.
    #[error("failed to decode {op} response: {source}")]
    Decode {
        op: ApiOp,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The operation that failed.
    pub fn op(&self) -> ApiOp {
        match self {
            ApiError::Transport { op, .. } => *op,
            ApiError::Status { op, .. } => *op,
            ApiError::Decode { op, .. } => *op,
        }
    }

    /// Fixed human-readable message for display on the originating form.
    pub fn user_message(&self) -> &'static str {
        match self.op() {
            ApiOp::ListProducts => "Failed to load products",
            ApiOp::CreateProduct => "Failed to add product",
            ApiOp::ListInventory => "Failed to load inventory",
            ApiOp::AddInventory => "Failed to add inventory item",
            ApiOp::ResetInventory => "Failed to reset inventory",
        }
    }
}
