use crate::ui::mvi::Intent;
use crate::ui::screen::ScreenIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum OperatorsIntent {
    TappedAdd(f64),
    TappedSubtract(f64),
    TappedMultiply(f64),
    /// Dividing by zero is ignored.
    TappedDivide(f64),
    /// Present a copy of this value as a fork.
    TappedFork,
    /// Present a counter starting at this value.
    TappedCounter,
    /// Intent for the presented screen.
    Presentation(Box<ScreenIntent>),
    Dismiss,
}

impl Intent for OperatorsIntent {}
