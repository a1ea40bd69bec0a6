use crate::ui::mvi::Reducer;
use crate::ui::store::intent::StoreIntent;
use crate::ui::store::state::AppState;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = AppState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::SetProducts(products) => AppState { products, ..state },
            StoreIntent::AddProduct(product) => {
                let mut products = state.products;
                products.push(product);
                AppState { products, ..state }
            }
            StoreIntent::SetInventory(inventory) => AppState { inventory, ..state },
            StoreIntent::ReplaceInventory(inventory) => AppState { inventory, ..state },
            StoreIntent::DeleteItem(index) => {
                // Filter semantics: a stale index drops nothing and raises
                // nothing.
                let inventory = state
                    .inventory
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, record)| record)
                    .collect();
                AppState { inventory, ..state }
            }
            StoreIntent::ResetInventory => AppState {
                inventory: Vec::new(),
                ..state
            },
        }
    }
}
