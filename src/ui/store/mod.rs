//! The application state container.
//!
//! One store owns `products` and `inventory`; both screens render borrowed
//! slices of it and mutate it only through [`StoreIntent`] transitions.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::AppState;
