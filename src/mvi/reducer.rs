//! Reducer trait.

use super::intent::Intent;
use super::state::StoreState;

/// Reducer transforms state based on intents: `(State, Intent) -> State`.
///
/// Reducers never perform I/O. Network calls and their dependent re-fetches
/// live in the dispatcher, around the dispatch call.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
