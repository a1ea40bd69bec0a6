use crate::api::{InventoryRecord, Product};
use crate::ui::mvi::UiState;

/// Sole owner of the data both screens render.
///
/// Order matters: products keep arrival/append order, inventory records are
/// addressed by their index in this list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryRecord>,
}

impl UiState for AppState {}
