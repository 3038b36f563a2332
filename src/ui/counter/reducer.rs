use crate::environment::AppEnvironment;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::{CancelId, Effect, Reducer};
use crate::ui::navigation::Presents;
use crate::ui::operators::{OperatorsReducer, OperatorsState};

/// Counter logic without the captured operators screen.
pub struct CounterCore;

impl Reducer for CounterCore {
    type State = CounterState;
    type Intent = CounterIntent;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent> {
        match intent {
            CounterIntent::Start => {
                if let Some(id) = state.id {
                    tracing::trace!(%id, "counter already running");
                    return Effect::none();
                }
                let id = environment.uuid.generate();
                state.id = Some(id);
                tracing::info!(%id, counter = state.counter, "counter started");
                environment
                    .main_queue
                    .repeating(environment.tick_interval, CounterIntent::Tick)
                    .cancellable(CancelId::from(id))
            }
            CounterIntent::Stop => match state.id.take() {
                Some(id) => {
                    tracing::info!(%id, counter = state.counter, "counter stopped");
                    Effect::cancel(CancelId::from(id))
                }
                None => Effect::none(),
            },
            CounterIntent::Tick => {
                state.counter += 1;
                Effect::none()
            }
            CounterIntent::TappedCapture => {
                let captured = OperatorsState::new(state.counter as f64);
                state.operators.present(captured, environment.uuid.as_ref());
                Effect::none()
            }
            CounterIntent::Operators(_) | CounterIntent::Dismiss => Effect::none(),
        }
    }
}

/// Counter with its captured operators screen.
pub struct CounterReducer;

impl CounterReducer {
    fn combined() -> Presents<CounterCore, OperatorsReducer> {
        Presents::new(
            CounterCore,
            OperatorsReducer,
            |state| &mut state.operators,
            |intent| match intent {
                CounterIntent::Operators(child) => Some(child.clone()),
                _ => None,
            },
            CounterIntent::Operators,
            |intent| matches!(intent, CounterIntent::Dismiss),
        )
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::operators::OperatorsIntent;

    #[test]
    fn start_sets_id_and_starts_keyed_tick() {
        let env = AppEnvironment::test();
        let mut state = CounterState::default();
        let effect = CounterReducer.reduce(&mut state, CounterIntent::Start, &env);

        let id = state.id.map(CancelId::from);
        assert!(id.is_some());
        assert_eq!(effect.run_count(), 1);
        assert_eq!(effect.cancellable_ids(), id.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let env = AppEnvironment::test();
        let mut state = CounterState::default();
        CounterReducer.reduce(&mut state, CounterIntent::Start, &env);
        let id = state.id;

        let effect = CounterReducer.reduce(&mut state, CounterIntent::Start, &env);
        assert!(effect.is_none());
        assert_eq!(state.id, id);
    }

    #[test]
    fn stop_cancels_tick_and_clears_id() {
        let env = AppEnvironment::test();
        let mut state = CounterState::default();
        CounterReducer.reduce(&mut state, CounterIntent::Start, &env);
        let id = state.id.map(CancelId::from);

        let effect = CounterReducer.reduce(&mut state, CounterIntent::Stop, &env);
        assert_eq!(state.id, None);
        assert_eq!(effect.cancelled_ids(), id.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn stop_while_idle_does_nothing() {
        let env = AppEnvironment::test();
        let mut state = CounterState::new(4);
        let effect = CounterReducer.reduce(&mut state, CounterIntent::Stop, &env);

        assert!(effect.is_none());
        assert_eq!(state, CounterState::new(4));
    }

    #[test]
    fn capture_presents_current_count() {
        let env = AppEnvironment::test();
        let mut state = CounterState::new(5);
        CounterReducer.reduce(&mut state, CounterIntent::TappedCapture, &env);

        assert_eq!(state.operators.get(), Some(&OperatorsState::new(5.0)));
    }

    #[test]
    fn dismiss_cancels_only_the_captured_screen() {
        let env = AppEnvironment::test();
        let mut state = CounterState::default();
        CounterReducer.reduce(&mut state, CounterIntent::Start, &env);
        CounterReducer.reduce(&mut state, CounterIntent::TappedCapture, &env);
        let tick = state.id.map(CancelId::from);
        let captured = state.operators.id().map(CancelId::from);

        let effect = CounterReducer.reduce(&mut state, CounterIntent::Dismiss, &env);
        let cancelled = effect.cancelled_ids();
        assert_eq!(cancelled, captured.into_iter().collect::<Vec<_>>());
        assert!(tick.is_some_and(|tick| !cancelled.contains(&tick)));
        assert!(state.is_running());
    }

    #[test]
    fn captured_screen_intents_are_routed() {
        let env = AppEnvironment::test();
        let mut state = CounterState::new(2);
        CounterReducer.reduce(&mut state, CounterIntent::TappedCapture, &env);
        CounterReducer.reduce(
            &mut state,
            CounterIntent::Operators(OperatorsIntent::TappedFork),
            &env,
        );

        let captured = state.operators.get();
        assert!(captured.is_some_and(|operators| operators.presentation.is_presented()));
    }
}
