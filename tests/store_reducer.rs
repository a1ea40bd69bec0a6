mod common;

use stockpile::api::{InventoryRecord, Product};
use stockpile::ui::mvi::Reducer;
use stockpile::ui::store::{AppState, StoreIntent, StoreReducer};

fn product(name: &str) -> Product {
    Product {
        name: name.to_string(),
    }
}

fn record(name: &str, quantity: u32) -> InventoryRecord {
    InventoryRecord {
        name: name.to_string(),
        quantity,
    }
}

fn state_with_inventory(records: Vec<InventoryRecord>) -> AppState {
    AppState {
        products: Vec::new(),
        inventory: records,
    }
}

#[test]
fn set_products_replaces_wholesale() {
    let state = AppState {
        products: vec![product("Old")],
        inventory: Vec::new(),
    };
    let state = StoreReducer::reduce(
        state,
        StoreIntent::SetProducts(vec![product("A"), product("B")]),
    );
    assert_eq!(state.products, vec![product("A"), product("B")]);
}

#[test]
fn add_product_appends_in_order() {
    let state = StoreReducer::reduce(AppState::default(), StoreIntent::AddProduct(product("A")));
    let state = StoreReducer::reduce(state, StoreIntent::AddProduct(product("B")));
    assert_eq!(state.products, vec![product("A"), product("B")]);
}

#[test]
fn set_inventory_replaces_wholesale() {
    let state = state_with_inventory(vec![record("Old", 1)]);
    let state = StoreReducer::reduce(
        state,
        StoreIntent::SetInventory(vec![record("Widget", 3)]),
    );
    assert_eq!(state.inventory, vec![record("Widget", 3)]);
}

#[test]
fn replace_inventory_is_not_an_append() {
    // The server's returned list wins, whatever was held locally
    let state = state_with_inventory(vec![record("Local", 1)]);
    let server_list = vec![record("Widget", 3), record("Gadget", 2)];
    let state = StoreReducer::reduce(state, StoreIntent::ReplaceInventory(server_list.clone()));
    assert_eq!(state.inventory, server_list);
}

#[test]
fn delete_item_removes_index_preserving_order() {
    let state = state_with_inventory(vec![record("A", 1), record("B", 2), record("C", 3)]);
    let state = StoreReducer::reduce(state, StoreIntent::DeleteItem(1));
    assert_eq!(state.inventory, vec![record("A", 1), record("C", 3)]);
}

#[test]
fn delete_out_of_range_is_a_silent_noop() {
    let state = state_with_inventory(vec![record("A", 1), record("B", 2)]);
    let state = StoreReducer::reduce(state, StoreIntent::DeleteItem(7));
    assert_eq!(state.inventory, vec![record("A", 1), record("B", 2)]);
}

#[test]
fn delete_does_not_touch_products() {
    let state = AppState {
        products: vec![product("A")],
        inventory: vec![record("A", 1)],
    };
    let state = StoreReducer::reduce(state, StoreIntent::DeleteItem(0));
    assert_eq!(state.products, vec![product("A")]);
    assert!(state.inventory.is_empty());
}

#[test]
fn reset_empties_inventory_regardless_of_contents() {
    let state = state_with_inventory(vec![record("A", 1), record("B", 2), record("C", 3)]);
    let state = StoreReducer::reduce(state, StoreIntent::ResetInventory);
    assert!(state.inventory.is_empty());
}
