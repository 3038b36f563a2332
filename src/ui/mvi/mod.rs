//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits and the runtime for unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │        Effect ──→ Store      │
//!    └──────────┴───────────────────┘
//! ```
//!
//! - **State**: Representation of UI state, owned by one store
//! - **Intent**: User actions or system events
//! - **Reducer**: Transforms state and describes side effects
//! - **Effect**: Deferred work; async bodies report back through an emitter
//! - **Store**: Serializes intents and runs effects with keyed cancellation

mod cancel;
mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use cancel::{CancellationRegistry, Liveness, TaskId};
pub use effect::{BoxFuture, CancelId, Effect, Emitter, RunFn};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{ScopedStore, Store};
