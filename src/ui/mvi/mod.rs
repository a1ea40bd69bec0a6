//! Model-View-Intent (MVI) architecture primitives.
//!
//! All screen state in this client flows one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to render
//! - **Intent**: user actions and API results, as named transitions
//! - **Reducer**: the only place a state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
