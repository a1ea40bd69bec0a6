use crate::ui::mvi::UiState;

/// Local form state for the product creation screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFormState {
    pub name: String,
    pub error: Option<String>,
}

impl UiState for ProductFormState {}

impl ProductFormState {
    /// The save affordance is disabled while the name is empty.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty()
    }
}
