//! Remote inventory service access.
//!
//! The service owns all durable state and business rules; this module is
//! the client side of that contract: wire types, a thin HTTP client, and a
//! background worker that keeps network I/O off the UI thread.

mod client;
mod error;
mod types;
pub mod worker;

pub use client::InventoryApi;
pub use error::{ApiError, ApiOp};
pub use types::{InventoryRecord, Product};
