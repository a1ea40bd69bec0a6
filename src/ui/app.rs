use std::time::{Duration, Instant};

use crate::api::worker::{ApiCommand, ApiCommandSender, ApiOutcome};
use crate::api::{ApiOp, InventoryRecord, Product};
use crate::ui::inventory::{InventoryField, InventoryFormState, InventoryIntent, InventoryReducer};
use crate::ui::mvi::Reducer;
use crate::ui::product::{ProductFormState, ProductIntent, ProductReducer};
use crate::ui::store::{AppState, StoreIntent, StoreReducer};

/// The two screens of the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Inventory,
    CreateProduct,
}

const NOTICE_TTL: Duration = Duration::from_secs(3);

const PRODUCT_ADDED: &str = "Product added successfully";
const INVENTORY_ADDED: &str = "Inventory item added successfully";
const INVENTORY_RESET: &str = "Inventory reset successfully";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

struct Notice {
    text: &'static str,
    expires_at: Instant,
}

/// Central application object: owns the store, the per-screen form states,
/// and the handle to the API worker. All mutation flows through reducer
/// dispatches, one event at a time.
pub struct App {
    should_quit: bool,
    screen: Screen,
    store: AppState,
    inventory_form: InventoryFormState,
    product_form: ProductFormState,
    notice: Option<Notice>,
    api: Option<ApiCommandSender>,
    api_base: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Inventory,
            store: AppState::default(),
            inventory_form: InventoryFormState::default(),
            product_form: ProductFormState::default(),
            notice: None,
            api: None,
            api_base: String::new(),
        }
    }

    /// Wire the API worker. Without one, commands are dropped with a
    /// warning (useful for driving the app in tests).
    pub fn attach_api(&mut self, sender: ApiCommandSender) {
        self.api = Some(sender);
    }

    pub fn set_api_base(&mut self, base: String) {
        self.api_base = base;
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Kick off the two independent initial reads. No ordering dependency
    /// between them, no retry.
    pub fn start_loading(&mut self) {
        self.send_api(ApiCommand::LoadProducts);
        self.send_api(ApiCommand::LoadInventory);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch screens. A screen entered this way starts from fresh local
    /// state, the way the SPA's route change remounted its component.
    pub fn go_to(&mut self, screen: Screen) {
        match screen {
            Screen::Inventory => {
                self.inventory_form = InventoryFormState::default();
                let first = self.first_product();
                dispatch_mvi!(
                    self,
                    inventory_form,
                    InventoryReducer,
                    InventoryIntent::ProductsChanged { first }
                );
            }
            Screen::CreateProduct => {
                self.product_form = ProductFormState::default();
            }
        }
        self.screen = screen;
    }

    pub fn store(&self) -> &AppState {
        &self.store
    }

    pub fn inventory_form(&self) -> &InventoryFormState {
        &self.inventory_form
    }

    pub fn inventory_focus(&self) -> InventoryField {
        self.inventory_form.focus
    }

    pub fn product_form(&self) -> &ProductFormState {
        &self.product_form
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.as_ref().map(|notice| notice.text)
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            if Instant::now() >= notice.expires_at {
                self.notice = None;
            }
        }
    }

    // -- Inventory screen actions ---------------------------------------

    pub fn focus_next(&mut self) {
        dispatch_mvi!(self, inventory_form, InventoryReducer, InventoryIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        dispatch_mvi!(self, inventory_form, InventoryReducer, InventoryIntent::FocusPrev);
    }

    /// Step the product selection through the store's product list.
    pub fn cycle_product(&mut self, step: i32) {
        if self.store.products.is_empty() {
            return;
        }
        let current = self
            .inventory_form
            .selected
            .as_deref()
            .and_then(|name| self.store.products.iter().position(|p| p.name == name));
        let next = match current {
            None => 0,
            Some(index) => {
                let len = self.store.products.len() as i32;
                (index as i32 + step).rem_euclid(len) as usize
            }
        };
        let name = self.store.products.get(next).map(|p| p.name.clone());
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::SelectProduct { name }
        );
    }

    pub fn quantity_char(&mut self, ch: char) {
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::QuantityChar(ch)
        );
    }

    pub fn quantity_backspace(&mut self) {
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::QuantityBackspace
        );
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.store.inventory.len();
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::MoveCursor { delta, len }
        );
    }

    /// Validate and, when valid, send the whole-collection write: the
    /// current inventory plus the new entry. Invalid input only sets the
    /// quantity error; nothing reaches the network.
    pub fn submit_inventory(&mut self) {
        let valid = self.inventory_form.can_submit();
        dispatch_mvi!(self, inventory_form, InventoryReducer, InventoryIntent::Submit);
        if !valid {
            return;
        }

        let (Some(selected), Some(quantity)) = (
            self.inventory_form.selected.clone(),
            self.inventory_form.parsed_quantity(),
        ) else {
            return;
        };

        if let Some(product) = self.store.products.iter().find(|p| p.name == selected) {
            let mut next = self.store.inventory.clone();
            next.push(InventoryRecord {
                name: product.name.clone(),
                quantity,
            });
            self.send_api(ApiCommand::AddInventory(next));
        }
    }

    /// Remove the record under the cursor from local state.
    // TODO: call the service's delete endpoint once it exists; removal is
    // local-only until then.
    pub fn delete_selected_item(&mut self) {
        let index = self.inventory_form.cursor;
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::DeleteItem(index));
        let len = self.store.inventory.len();
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::MoveCursor { delta: 0, len }
        );
    }

    pub fn reset_inventory(&mut self) {
        self.send_api(ApiCommand::ResetInventory);
    }

    // -- Product screen actions -----------------------------------------

    pub fn product_char(&mut self, ch: char) {
        dispatch_mvi!(self, product_form, ProductReducer, ProductIntent::NameChar(ch));
    }

    pub fn product_backspace(&mut self) {
        dispatch_mvi!(self, product_form, ProductReducer, ProductIntent::NameBackspace);
    }

    /// Send the creation request. A submit with an empty name is ignored
    /// (the save affordance is disabled).
    pub fn submit_product(&mut self) {
        if !self.product_form.can_submit() {
            return;
        }
        let product = Product {
            name: self.product_form.name.clone(),
        };
        self.send_api(ApiCommand::CreateProduct(product));
    }

    // -- API results -----------------------------------------------------

    pub fn on_api(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::ProductsLoaded(products) => {
                let first = products.first().map(|p| p.name.clone());
                dispatch_mvi!(self, store, StoreReducer, StoreIntent::SetProducts(products));
                dispatch_mvi!(
                    self,
                    inventory_form,
                    InventoryReducer,
                    InventoryIntent::ProductsChanged { first }
                );
            }
            ApiOutcome::InventoryLoaded(inventory) => {
                dispatch_mvi!(self, store, StoreReducer, StoreIntent::SetInventory(inventory));
            }
            ApiOutcome::ProductCreated(product) => {
                dispatch_mvi!(self, store, StoreReducer, StoreIntent::AddProduct(product));
                dispatch_mvi!(self, product_form, ProductReducer, ProductIntent::CreateSucceeded);
                self.set_notice(PRODUCT_ADDED);
            }
            ApiOutcome::InventoryReplaced(inventory) => {
                dispatch_mvi!(
                    self,
                    store,
                    StoreReducer,
                    StoreIntent::ReplaceInventory(inventory)
                );
                let first = self.first_product();
                dispatch_mvi!(
                    self,
                    inventory_form,
                    InventoryReducer,
                    InventoryIntent::AddSucceeded { first }
                );
                self.clamp_cursor();
                self.set_notice(INVENTORY_ADDED);
            }
            ApiOutcome::InventoryReset => {
                dispatch_mvi!(self, store, StoreReducer, StoreIntent::ResetInventory);
                self.clamp_cursor();
                self.set_notice(INVENTORY_RESET);
            }
            ApiOutcome::Failed { op, message } => match op {
                ApiOp::CreateProduct => {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductReducer,
                        ProductIntent::CreateFailed { message }
                    );
                }
                ApiOp::AddInventory => {
                    dispatch_mvi!(self, inventory_form, InventoryReducer, InventoryIntent::AddFailed);
                }
                ApiOp::ResetInventory => {
                    dispatch_mvi!(
                        self,
                        inventory_form,
                        InventoryReducer,
                        InventoryIntent::ResetFailed
                    );
                }
                // Loads never surface failures to the UI
                ApiOp::ListProducts | ApiOp::ListInventory => {}
            },
        }
    }

    // -- Internals --------------------------------------------------------

    fn first_product(&self) -> Option<String> {
        self.store.products.first().map(|p| p.name.clone())
    }

    fn clamp_cursor(&mut self) {
        let len = self.store.inventory.len();
        dispatch_mvi!(
            self,
            inventory_form,
            InventoryReducer,
            InventoryIntent::MoveCursor { delta: 0, len }
        );
    }

    fn set_notice(&mut self, text: &'static str) {
        self.notice = Some(Notice {
            text,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    fn send_api(&mut self, command: ApiCommand) {
        let Some(api) = &self.api else {
            tracing::warn!("api command dropped: no worker attached");
            return;
        };
        if let Err(err) = api.try_send(command) {
            tracing::warn!(error = %err, "api command dropped");
        }
    }
}
