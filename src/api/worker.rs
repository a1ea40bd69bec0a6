//! Background task owning all network I/O.
//!
//! The UI thread never blocks on the network: it enqueues [`ApiCommand`]s
//! and the worker posts [`ApiOutcome`]s back through the UI event channel.
//! Commands drain strictly in order, one at a time, so responses apply in
//! the order the user issued them.

use std::sync::mpsc;
use std::time::Instant;

use tokio::sync::mpsc as tokio_mpsc;

use crate::api::client::InventoryApi;
use crate::api::error::{ApiError, ApiOp};
use crate::api::types::{InventoryRecord, Product};
use crate::ui::events::AppEvent;

/// Requests the UI sends to the worker.
#[derive(Debug)]
pub enum ApiCommand {
    LoadProducts,
    LoadInventory,
    CreateProduct(Product),
    /// Whole-collection write: the full current inventory plus the new item.
    AddInventory(Vec<InventoryRecord>),
    ResetInventory,
}

/// Results posted back to the UI.
#[derive(Debug, Clone)]
pub enum ApiOutcome {
    ProductsLoaded(Vec<Product>),
    InventoryLoaded(Vec<InventoryRecord>),
    ProductCreated(Product),
    /// Server response to an add; replaces local inventory wholesale.
    InventoryReplaced(Vec<InventoryRecord>),
    InventoryReset,
    Failed { op: ApiOp, message: String },
}

pub type ApiCommandSender = tokio_mpsc::Sender<ApiCommand>;

const COMMAND_CHANNEL_SIZE: usize = 32;

/// Spawn the worker thread with its own current-thread runtime.
///
/// The thread exits when the last command sender is dropped or when the
/// UI event channel closes.
pub fn spawn(
    api: InventoryApi,
    events: mpsc::Sender<AppEvent>,
) -> std::io::Result<ApiCommandSender> {
    let (tx, mut rx) = tokio_mpsc::channel(COMMAND_CHANNEL_SIZE);

    std::thread::Builder::new()
        .name("api-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "failed to build API worker runtime");
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(command) = rx.recv().await {
                    if !handle(&api, &events, command).await {
                        break;
                    }
                }
            });
        })?;

    Ok(tx)
}

/// Run one command to completion. Returns `false` once the UI side is gone.
async fn handle(
    api: &InventoryApi,
    events: &mpsc::Sender<AppEvent>,
    command: ApiCommand,
) -> bool {
    let started = Instant::now();

    let outcome = match command {
        ApiCommand::LoadProducts => match api.list_products().await {
            Ok(products) => Some(ApiOutcome::ProductsLoaded(products)),
            Err(err) => load_failed(err),
        },
        ApiCommand::LoadInventory => match api.list_inventory().await {
            Ok(inventory) => Some(ApiOutcome::InventoryLoaded(inventory)),
            Err(err) => load_failed(err),
        },
        ApiCommand::CreateProduct(product) => match api.create_product(&product).await {
            Ok(created) => Some(ApiOutcome::ProductCreated(created)),
            Err(err) => Some(write_failed(err)),
        },
        ApiCommand::AddInventory(inventory) => match api.replace_inventory(&inventory).await {
            Ok(list) => Some(ApiOutcome::InventoryReplaced(list)),
            Err(err) => Some(write_failed(err)),
        },
        ApiCommand::ResetInventory => match api.reset_inventory().await {
            Ok(()) => Some(ApiOutcome::InventoryReset),
            Err(err) => Some(write_failed(err)),
        },
    };

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api command finished"
    );

    match outcome {
        Some(outcome) => events.send(AppEvent::Api(outcome)).is_ok(),
        None => true,
    }
}

/// Initial loads have no error surface; the screen keeps whatever it
/// already shows.
fn load_failed(err: ApiError) -> Option<ApiOutcome> {
    tracing::warn!(op = %err.op(), error = %err, "load failed");
    None
}

fn write_failed(err: ApiError) -> ApiOutcome {
    tracing::warn!(op = %err.op(), error = %err, "write failed");
    ApiOutcome::Failed {
        op: err.op(),
        message: err.user_message().to_string(),
    }
}
