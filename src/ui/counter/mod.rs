//! Counter screen: a value that ticks once per interval while running,
//! and can capture its current value into an operators screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::{CounterCore, CounterReducer};
pub use state::CounterState;
pub use view::render;
