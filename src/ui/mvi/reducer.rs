//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// A reducer must be a pure function `(State, Intent) -> State`; side
/// effects (network calls) are issued by the caller, never in here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
