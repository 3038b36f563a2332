//! The recursive screen type and its dispatchers.
//!
//! `ScreenState` is the closed set of screens that can be presented. Each
//! variant may itself present another `ScreenState`, so both rendering and
//! routing recurse until they reach an empty slot.

use crate::environment::AppEnvironment;
use crate::ui::canvas::Canvas;
use crate::ui::counter::{self, CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::{Effect, Intent, Reducer, ScopedStore, UiState};
use crate::ui::navigation::{in_presentation_context, PresentationType};
use crate::ui::operators::{self, OperatorsIntent, OperatorsReducer, OperatorsState};

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Counter(CounterState),
    Operators(OperatorsState),
}

impl Default for ScreenState {
    fn default() -> Self {
        ScreenState::Operators(OperatorsState::default())
    }
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn title(&self) -> String {
        match self {
            ScreenState::Counter(state) => state.title(),
            ScreenState::Operators(state) => state.title(),
        }
    }

    /// Titles from this screen down to the deepest presented one.
    pub fn breadcrumbs(&self) -> Vec<String> {
        let mut trail = Vec::new();
        let mut current = Some(self);
        while let Some(screen) = current {
            trail.push(screen.title());
            current = match screen {
                ScreenState::Operators(state) => state.presentation.get(),
                ScreenState::Counter(state) => {
                    let Some(captured) = state.operators.get() else {
                        break;
                    };
                    trail.push(captured.title());
                    captured.presentation.get()
                }
            };
        }
        trail
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent {
    Counter(CounterIntent),
    Operators(OperatorsIntent),
}

impl Intent for ScreenIntent {}

/// Routes each intent to the reducer of the matching variant.
pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent> {
        match (state, intent) {
            (ScreenState::Counter(state), ScreenIntent::Counter(intent)) => CounterReducer
                .reduce(state, intent, environment)
                .map(ScreenIntent::Counter),
            (ScreenState::Operators(state), ScreenIntent::Operators(intent)) => OperatorsReducer
                .reduce(state, intent, environment)
                .map(ScreenIntent::Operators),
            (state, intent) => {
                tracing::trace!(screen = %state.title(), ?intent, "intent for another screen, ignored");
                Effect::none()
            }
        }
    }
}

/// Operators pushed onto the detail column, forks shown as a sheet.
pub fn screen_presentation(state: &ScreenState) -> PresentationType {
    match state {
        ScreenState::Operators(operators) if operators.is_fork => PresentationType::Sheet,
        ScreenState::Operators(_) => PresentationType::detail_navigation(),
        ScreenState::Counter(_) => PresentationType::detail_navigation(),
    }
}

/// A counter's captured value opens full screen, forks as a sheet.
pub fn captured_operators_presentation(state: &OperatorsState) -> PresentationType {
    if state.is_fork {
        PresentationType::Sheet
    } else {
        PresentationType::FullScreenCover
    }
}

pub fn render_screen(canvas: &mut Canvas<'_>, store: ScopedStore<'_, ScreenState, ScreenIntent>) {
    match store.state() {
        ScreenState::Counter(state) => counter::render(
            canvas,
            ScopedStore::new(state, store.emitter().scope(ScreenIntent::Counter)),
        ),
        ScreenState::Operators(state) => operators::render(
            canvas,
            ScopedStore::new(state, store.emitter().scope(ScreenIntent::Operators)),
        ),
    }
}

/// Destination renderer for a presented screen.
pub fn render_presented(
    style: PresentationType,
    store: ScopedStore<'_, ScreenState, ScreenIntent>,
    canvas: &mut Canvas<'_>,
) {
    in_presentation_context(canvas, style, |canvas| render_screen(canvas, store));
}
