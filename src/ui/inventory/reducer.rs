use crate::ui::inventory::intent::InventoryIntent;
use crate::ui::inventory::state::{InventoryField, InventoryFormState};
use crate::ui::mvi::Reducer;

pub const QUANTITY_MESSAGE: &str = "Quantity must be 1 or more";
/// Deliberately generic: the inventory screen does not forward the
/// underlying failure's message.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add inventory item";
pub const RESET_FAILED_MESSAGE: &str = "Failed to reset inventory";

const QUANTITY_MAX_DIGITS: usize = 9;

pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryFormState;
    type Intent = InventoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::ProductsChanged { first } => match first {
                Some(name) => InventoryFormState {
                    selected: Some(name),
                    ..state
                },
                None => state,
            },
            InventoryIntent::FocusNext => InventoryFormState {
                focus: next_field(state.focus),
                ..state
            },
            InventoryIntent::FocusPrev => InventoryFormState {
                focus: prev_field(state.focus),
                ..state
            },
            InventoryIntent::SelectProduct { name } => InventoryFormState {
                selected: name,
                ..state
            },
            InventoryIntent::QuantityChar(ch) => {
                let mut quantity = state.quantity;
                if ch.is_ascii_digit() && quantity.len() < QUANTITY_MAX_DIGITS {
                    quantity.push(ch);
                }
                InventoryFormState { quantity, ..state }
            }
            InventoryIntent::QuantityBackspace => {
                let mut quantity = state.quantity;
                quantity.pop();
                InventoryFormState { quantity, ..state }
            }
            InventoryIntent::MoveCursor { delta, len } => InventoryFormState {
                cursor: step_cursor(state.cursor, delta, len),
                ..state
            },
            InventoryIntent::Submit => {
                if state.can_submit() {
                    state
                } else {
                    InventoryFormState {
                        error: Some(QUANTITY_MESSAGE.to_string()),
                        ..state
                    }
                }
            }
            InventoryIntent::AddSucceeded { first } => InventoryFormState {
                selected: first,
                quantity: String::new(),
                error: None,
                ..state
            },
            InventoryIntent::AddFailed => InventoryFormState {
                error: Some(ADD_FAILED_MESSAGE.to_string()),
                ..state
            },
            InventoryIntent::ResetFailed => InventoryFormState {
                error: Some(RESET_FAILED_MESSAGE.to_string()),
                ..state
            },
        }
    }
}

fn next_field(field: InventoryField) -> InventoryField {
    match field {
        InventoryField::Product => InventoryField::Quantity,
        InventoryField::Quantity => InventoryField::List,
        InventoryField::List => InventoryField::Product,
    }
}

fn prev_field(field: InventoryField) -> InventoryField {
    match field {
        InventoryField::Product => InventoryField::List,
        InventoryField::Quantity => InventoryField::Product,
        InventoryField::List => InventoryField::Quantity,
    }
}

fn step_cursor(cursor: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    let moved = cursor as i64 + i64::from(delta);
    moved.clamp(0, max as i64) as usize
}
