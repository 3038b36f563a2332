//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It mutates
/// the state it is handed and describes any side effects as an [`Effect`];
/// it never blocks, spawns, or reads the clock itself. External services come
/// in through the environment.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Dependencies injected at the composition root.
    type Environment;

    /// Process an intent and return the work it requests.
    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent>;
}
