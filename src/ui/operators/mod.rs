//! Operators screen: arithmetic on a value, where every result is shown by
//! presenting a new screen instead of changing this one.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::OperatorsIntent;
pub use reducer::{OperatorsCore, OperatorsReducer};
pub use state::OperatorsState;
pub use view::render;
