mod common;

use std::time::Duration;

use common::{as_counter, as_operators};
use recursive_nav::environment::AppEnvironment;
use recursive_nav::ui::counter::{CounterIntent, CounterState};
use recursive_nav::ui::mvi::{CancelId, Store};
use recursive_nav::ui::operators::OperatorsIntent;
use recursive_nav::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};

fn counter_store() -> Store<ScreenReducer> {
    Store::new(
        ScreenState::Counter(CounterState::default()),
        ScreenReducer,
        AppEnvironment::test(),
    )
}

fn operators_store() -> Store<ScreenReducer> {
    Store::new(ScreenState::default(), ScreenReducer, AppEnvironment::test())
}

fn counter(intent: CounterIntent) -> ScreenIntent {
    ScreenIntent::Counter(intent)
}

fn operators(intent: OperatorsIntent) -> ScreenIntent {
    ScreenIntent::Operators(intent)
}

fn captured(intent: OperatorsIntent) -> ScreenIntent {
    counter(CounterIntent::Operators(intent))
}

fn tick_id(state: &ScreenState) -> Option<CancelId> {
    as_counter(state).id.map(CancelId::from)
}

/// Test that start is idempotent: a second start never adds a timer.
#[tokio::test(start_paused = true)]
async fn test_start_twice_runs_one_timer() {
    let mut store = counter_store();
    store.send(counter(CounterIntent::Start));
    let id = tick_id(store.state());

    store.send(counter(CounterIntent::Start));
    assert_eq!(tick_id(store.state()), id);
    assert_eq!(store.active_effects(), 1);
}

/// Test that the timer delivers ticks through the store queue.
#[tokio::test(start_paused = true)]
async fn test_tick_increments_counter() {
    let mut store = counter_store();
    store.send(counter(CounterIntent::Start));

    assert_eq!(store.next().await, counter(CounterIntent::Tick));
    assert_eq!(store.next().await, counter(CounterIntent::Tick));
    assert_eq!(as_counter(store.state()).counter, 2);
}

/// Test that dismissing a captured screen cancels exactly its subtree.
#[tokio::test(start_paused = true)]
async fn test_dismiss_capture_keeps_parent_timer() {
    let mut store = counter_store();
    store.send(counter(CounterIntent::Start));
    let root_tick = tick_id(store.state());

    store.send(counter(CounterIntent::TappedCapture));
    store.send(captured(OperatorsIntent::TappedCounter));
    assert_eq!(store.active_effects(), 2);

    store.send(counter(CounterIntent::Dismiss));
    assert_eq!(store.active_effects(), 1);
    assert!(root_tick.is_some_and(|id| store.is_effect_active(id)));
    assert!(!as_counter(store.state()).operators.is_presented());

    assert_eq!(store.next().await, counter(CounterIntent::Tick));
    assert_eq!(as_counter(store.state()).counter, 1);
}

/// Test that replacing a presented counter stops its timer before the
/// replacement is visible.
#[tokio::test(start_paused = true)]
async fn test_replacement_cancels_previous_occupant() {
    let mut store = operators_store();
    store.send(operators(OperatorsIntent::TappedCounter));
    let nested = as_operators(store.state())
        .presentation
        .get()
        .and_then(|screen| as_counter(screen).id)
        .map(CancelId::from);
    assert!(nested.is_some_and(|id| store.is_effect_active(id)));

    store.send(operators(OperatorsIntent::TappedFork));
    assert!(nested.is_some_and(|id| !store.is_effect_active(id)));
    assert_eq!(store.active_effects(), 0);
}

/// Test that nothing from a cleared child is observed after the clear.
#[tokio::test(start_paused = true)]
async fn test_no_delivery_after_clear() {
    let mut store = operators_store();
    store.send(operators(OperatorsIntent::TappedCounter));

    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_secs(1)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }

    store.send(operators(OperatorsIntent::Dismiss));
    assert_eq!(store.drain_queued(), 0);

    let waited = tokio::time::timeout(Duration::from_secs(5), store.next()).await;
    assert!(waited.is_err());
    assert_eq!(store.state(), &ScreenState::default());
}

/// Test that clearing an outer slot stops timers nested several levels deep.
#[tokio::test(start_paused = true)]
async fn test_clear_cancels_whole_nested_subtree() {
    let mut store = operators_store();
    store.send(operators(OperatorsIntent::TappedCounter));
    let into_counter = |intent: CounterIntent| {
        operators(OperatorsIntent::Presentation(Box::new(counter(intent))))
    };
    store.send(into_counter(CounterIntent::TappedCapture));
    store.send(into_counter(CounterIntent::Operators(
        OperatorsIntent::TappedCounter,
    )));
    assert_eq!(store.active_effects(), 2);

    store.send(operators(OperatorsIntent::Dismiss));
    assert_eq!(store.active_effects(), 0);
}

/// Test that stopping a counter cancels its timer and allows a restart.
#[tokio::test(start_paused = true)]
async fn test_stop_then_start_again() {
    let mut store = counter_store();
    store.send(counter(CounterIntent::Start));
    let first = tick_id(store.state());

    store.send(counter(CounterIntent::Stop));
    assert_eq!(store.active_effects(), 0);
    assert_eq!(tick_id(store.state()), None);

    store.send(counter(CounterIntent::Start));
    assert_eq!(store.active_effects(), 1);
    assert_ne!(tick_id(store.state()), first);
}
