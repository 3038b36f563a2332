use crate::environment::AppEnvironment;
use crate::ui::counter::{CounterIntent, CounterState};
use crate::ui::mvi::{Effect, Reducer};
use crate::ui::navigation::Presents;
use crate::ui::operators::intent::OperatorsIntent;
use crate::ui::operators::state::OperatorsState;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};

/// Operators logic without the presented screen.
pub struct OperatorsCore;

impl OperatorsCore {
    fn present_result(state: &mut OperatorsState, value: f64, environment: &AppEnvironment) {
        let result = ScreenState::Operators(OperatorsState::new(value));
        state.presentation.present(result, environment.uuid.as_ref());
    }
}

impl Reducer for OperatorsCore {
    type State = OperatorsState;
    type Intent = OperatorsIntent;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent> {
        match intent {
            OperatorsIntent::TappedAdd(operand) => {
                let value = state.value + operand;
                Self::present_result(state, value, environment);
                Effect::none()
            }
            OperatorsIntent::TappedSubtract(operand) => {
                let value = state.value - operand;
                Self::present_result(state, value, environment);
                Effect::none()
            }
            OperatorsIntent::TappedMultiply(operand) => {
                let value = state.value * operand;
                Self::present_result(state, value, environment);
                Effect::none()
            }
            OperatorsIntent::TappedDivide(operand) if operand == 0.0 => {
                tracing::warn!(value = state.value, "division by zero ignored");
                Effect::none()
            }
            OperatorsIntent::TappedDivide(operand) => {
                let value = state.value / operand;
                Self::present_result(state, value, environment);
                Effect::none()
            }
            OperatorsIntent::TappedFork => {
                let fork = ScreenState::Operators(OperatorsState::fork(state.value));
                state.presentation.present(fork, environment.uuid.as_ref());
                Effect::none()
            }
            OperatorsIntent::TappedCounter => {
                let counter = ScreenState::Counter(CounterState::new(state.value as i64));
                state.presentation.present(counter, environment.uuid.as_ref());
                Effect::dispatch(OperatorsIntent::Presentation(Box::new(
                    ScreenIntent::Counter(CounterIntent::Start),
                )))
            }
            OperatorsIntent::Presentation(_) | OperatorsIntent::Dismiss => Effect::none(),
        }
    }
}

/// Operators with whatever screen it currently presents.
pub struct OperatorsReducer;

impl OperatorsReducer {
    fn combined() -> Presents<OperatorsCore, ScreenReducer> {
        Presents::new(
            OperatorsCore,
            ScreenReducer,
            |state| &mut state.presentation,
            |intent| match intent {
                OperatorsIntent::Presentation(child) => Some(child.as_ref().clone()),
                _ => None,
            },
            |child| OperatorsIntent::Presentation(Box::new(child)),
            |intent| matches!(intent, OperatorsIntent::Dismiss),
        )
    }
}

impl Reducer for OperatorsReducer {
    type State = OperatorsState;
    type Intent = OperatorsIntent;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent> {
        Self::combined().reduce(state, intent, environment)
    }
}
