use uuid::Uuid;

use crate::ui::mvi::UiState;
use crate::ui::navigation::PresentedSlot;
use crate::ui::operators::OperatorsState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    /// Set exactly while the tick effect runs; also its cancellation key.
    pub id: Option<Uuid>,
    pub counter: i64,
    pub operators: PresentedSlot<OperatorsState>,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(counter: i64) -> Self {
        Self {
            counter,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        format!("Counter {}", self.counter)
    }
}
