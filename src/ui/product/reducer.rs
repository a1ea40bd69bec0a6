use crate::ui::mvi::Reducer;
use crate::ui::product::intent::ProductIntent;
use crate::ui::product::state::ProductFormState;

pub const GENERIC_MESSAGE: &str = "An error occurred";

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductFormState;
    type Intent = ProductIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductIntent::NameChar(ch) => {
                let mut name = state.name;
                if !ch.is_control() {
                    name.push(ch);
                }
                ProductFormState { name, error: None }
            }
            ProductIntent::NameBackspace => {
                let mut name = state.name;
                name.pop();
                ProductFormState { name, error: None }
            }
            ProductIntent::CreateSucceeded => ProductFormState::default(),
            ProductIntent::CreateFailed { message } => {
                let message = if message.is_empty() {
                    GENERIC_MESSAGE.to_string()
                } else {
                    message
                };
                ProductFormState {
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
