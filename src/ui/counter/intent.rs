use crate::ui::mvi::Intent;
use crate::ui::operators::OperatorsIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    /// Start the repeating tick. No-op while already running.
    Start,
    Stop,
    Tick,
    /// Present the current count in an operators screen.
    TappedCapture,
    /// Intent for the captured operators screen.
    Operators(OperatorsIntent),
    Dismiss,
}

impl Intent for CounterIntent {}
