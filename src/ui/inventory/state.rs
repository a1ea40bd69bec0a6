use crate::ui::mvi::UiState;

/// Which control on the inventory screen has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryField {
    #[default]
    Product,
    Quantity,
    List,
}

/// Local form state for the inventory screen.
///
/// Only derived/form state lives here; the record and product lists belong
/// to the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryFormState {
    /// Selected product name. `None` renders the placeholder choice.
    pub selected: Option<String>,
    /// Raw digit buffer for the quantity input.
    pub quantity: String,
    pub error: Option<String>,
    pub focus: InventoryField,
    /// Cursor into the inventory list; delete acts on this index.
    pub cursor: usize,
}

impl UiState for InventoryFormState {}

impl InventoryFormState {
    /// The quantity, when the buffer holds an integer ≥ 1.
    pub fn parsed_quantity(&self) -> Option<u32> {
        self.quantity.parse::<u32>().ok().filter(|q| *q >= 1)
    }

    /// Submit is enabled only with a selection and a valid quantity.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.parsed_quantity().is_some()
    }
}
