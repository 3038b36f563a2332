//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, dismissal gestures)
/// - System events (timer ticks)
/// - Navigation events (present, dismiss)
///
/// Intents are processed by reducers to produce new states. They are cloned
/// when a parent reducer observes an action it also routes to a child.
pub trait Intent: Clone + Debug + Send + 'static {}
