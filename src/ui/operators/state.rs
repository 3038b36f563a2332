use crate::ui::mvi::UiState;
use crate::ui::navigation::PresentedSlot;
use crate::ui::screen::ScreenState;

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorsState {
    pub value: f64,
    pub is_fork: bool,
    pub presentation: PresentedSlot<ScreenState>,
}

impl Default for OperatorsState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl UiState for OperatorsState {}

impl OperatorsState {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            is_fork: false,
            presentation: PresentedSlot::empty(),
        }
    }

    pub fn fork(value: f64) -> Self {
        Self {
            is_fork: true,
            ..Self::new(value)
        }
    }

    pub fn title(&self) -> String {
        if self.is_fork {
            format!("Fork {}", self.value)
        } else {
            format!("Operators {}", self.value)
        }
    }
}
