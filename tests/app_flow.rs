mod common;

use common::make_app_with_probe;
use stockpile::api::worker::{ApiCommand, ApiOutcome};
use stockpile::api::{ApiOp, InventoryRecord, Product};
use stockpile::ui::app::Screen;

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

// -- Initial load -------------------------------------------------------

#[test]
fn start_loading_issues_both_reads() {
    let (mut app, mut rx) = make_app_with_probe();
    app.start_loading();

    assert!(matches!(rx.try_recv(), Ok(ApiCommand::LoadProducts)));
    assert!(matches!(rx.try_recv(), Ok(ApiCommand::LoadInventory)));
}

#[test]
fn loaded_products_auto_select_the_first() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("A"), product("B")]));

    assert_eq!(app.store().products.len(), 2);
    assert_eq!(app.inventory_form().selected.as_deref(), Some("A"));
}

#[test]
fn product_refresh_resets_selection_to_first() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("A"), product("B")]));
    app.cycle_product(1);
    assert_eq!(app.inventory_form().selected.as_deref(), Some("B"));

    // A second load overwrites the user's pick
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("A"), product("B")]));
    assert_eq!(app.inventory_form().selected.as_deref(), Some("A"));
}

// -- Adding inventory ---------------------------------------------------

#[test]
fn invalid_quantity_never_reaches_the_network() {
    let (mut app, mut rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("Widget")]));

    app.quantity_char('0');
    app.submit_inventory();

    assert!(rx.try_recv().is_err());
    assert_eq!(
        app.inventory_form().error.as_deref(),
        Some("Quantity must be 1 or more")
    );
}

#[test]
fn valid_submit_posts_current_list_plus_new_item() {
    let (mut app, mut rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("Widget")]));
    app.on_api(ApiOutcome::InventoryLoaded(vec![record("Gadget", 2)]));

    app.quantity_char('3');
    app.submit_inventory();

    match rx.try_recv() {
        Ok(ApiCommand::AddInventory(list)) => {
            assert_eq!(list, vec![record("Gadget", 2), record("Widget", 3)]);
        }
        other => panic!("expected AddInventory, got {:?}", other),
    }
}

#[test]
fn server_response_replaces_local_inventory() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("Widget")]));
    app.on_api(ApiOutcome::InventoryLoaded(vec![record("Gadget", 2)]));

    // Whatever the server returns is the new truth, not a local append
    let server_list = vec![record("Widget", 3)];
    app.on_api(ApiOutcome::InventoryReplaced(server_list.clone()));

    assert_eq!(app.store().inventory, server_list);
    assert!(app.inventory_form().quantity.is_empty());
    assert_eq!(app.inventory_form().selected.as_deref(), Some("Widget"));
    assert_eq!(app.notice(), Some("Inventory item added successfully"));
}

#[test]
fn add_failure_shows_the_generic_message() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::Failed {
        op: ApiOp::AddInventory,
        message: "anything detailed".to_string(),
    });
    assert_eq!(
        app.inventory_form().error.as_deref(),
        Some("Failed to add inventory item")
    );
}

// -- Creating products --------------------------------------------------

#[test]
fn empty_name_never_submits() {
    let (mut app, mut rx) = make_app_with_probe();
    app.go_to(Screen::CreateProduct);
    app.submit_product();
    assert!(rx.try_recv().is_err());
}

#[test]
fn created_product_appends_and_clears_the_form() {
    let (mut app, mut rx) = make_app_with_probe();
    app.go_to(Screen::CreateProduct);
    for ch in "Widget".chars() {
        app.product_char(ch);
    }
    app.submit_product();
    assert!(matches!(rx.try_recv(), Ok(ApiCommand::CreateProduct(p)) if p.name == "Widget"));

    app.on_api(ApiOutcome::ProductCreated(product("Widget")));
    assert_eq!(app.store().products, vec![product("Widget")]);
    assert!(app.product_form().name.is_empty());
    assert_eq!(app.notice(), Some("Product added successfully"));
}

#[test]
fn create_failure_keeps_products_and_sets_error() {
    let (mut app, _rx) = make_app_with_probe();
    app.go_to(Screen::CreateProduct);
    app.on_api(ApiOutcome::Failed {
        op: ApiOp::CreateProduct,
        message: "Failed to add product".to_string(),
    });
    assert!(app.store().products.is_empty());
    assert_eq!(
        app.product_form().error.as_deref(),
        Some("Failed to add product")
    );
}

// -- Delete and reset ---------------------------------------------------

#[test]
fn delete_removes_locally_and_sends_nothing() {
    let (mut app, mut rx) = make_app_with_probe();
    app.on_api(ApiOutcome::InventoryLoaded(vec![
        record("A", 1),
        record("B", 2),
        record("C", 3),
    ]));

    app.move_cursor(1);
    app.delete_selected_item();

    assert_eq!(app.store().inventory, vec![record("A", 1), record("C", 3)]);
    assert!(rx.try_recv().is_err());
}

#[test]
fn reset_success_empties_inventory() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::InventoryLoaded(vec![
        record("A", 1),
        record("B", 2),
    ]));

    app.on_api(ApiOutcome::InventoryReset);
    assert!(app.store().inventory.is_empty());
    assert_eq!(app.notice(), Some("Inventory reset successfully"));
}

#[test]
fn reset_failure_shows_its_message() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::Failed {
        op: ApiOp::ResetInventory,
        message: "Failed to reset inventory".to_string(),
    });
    assert_eq!(
        app.inventory_form().error.as_deref(),
        Some("Failed to reset inventory")
    );
}

// -- Navigation ---------------------------------------------------------

#[test]
fn screens_remount_with_fresh_state() {
    let (mut app, _rx) = make_app_with_probe();
    app.go_to(Screen::CreateProduct);
    app.product_char('X');
    app.go_to(Screen::Inventory);
    app.go_to(Screen::CreateProduct);
    assert!(app.product_form().name.is_empty());
}

#[test]
fn returning_to_inventory_reselects_the_first_product() {
    let (mut app, _rx) = make_app_with_probe();
    app.on_api(ApiOutcome::ProductsLoaded(vec![product("A"), product("B")]));
    app.cycle_product(1);
    assert_eq!(app.inventory_form().selected.as_deref(), Some("B"));

    app.go_to(Screen::CreateProduct);
    app.go_to(Screen::Inventory);
    assert_eq!(app.inventory_form().selected.as_deref(), Some("A"));
}
