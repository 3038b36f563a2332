//! Dependencies injected into reducers.
//!
//! Built once at the composition root and passed down by reference. Features
//! never reach for a clock, a scheduler, or a random source on their own.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::ui::mvi::{Effect, Intent};

/// Source of unique identity tokens.
pub trait UuidGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveUuidGenerator;

impl UuidGenerator for LiveUuidGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers `00000000-...-000000000001`, `...02`, and so on.
#[derive(Debug, Default)]
pub struct IncrementingUuidGenerator {
    next: AtomicU64,
}

impl IncrementingUuidGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UuidGenerator for IncrementingUuidGenerator {
    fn generate(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Uuid::from_u128(u128::from(n))
    }
}

/// Logical queue that timer effects are scheduled on.
#[derive(Debug, Clone)]
pub struct Scheduler {
    label: &'static str,
}

impl Scheduler {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Effect that emits `intent` every `interval` until cancelled.
    ///
    /// The first emission happens one interval after the effect starts.
    pub fn repeating<A: Intent>(&self, interval: Duration, intent: A) -> Effect<A> {
        let label = self.label;
        Effect::run(move |emit| async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !emit.send(intent.clone()) {
                    tracing::trace!(scheduler = label, "timer receiver gone, stopping");
                    break;
                }
            }
        })
    }
}

/// Everything screen features may depend on.
#[derive(Clone)]
pub struct AppEnvironment {
    pub uuid: Arc<dyn UuidGenerator>,
    pub main_queue: Scheduler,
    pub tick_interval: Duration,
}

impl AppEnvironment {
    pub fn live(tick_interval: Duration) -> Self {
        Self {
            uuid: Arc::new(LiveUuidGenerator),
            main_queue: Scheduler::new("main"),
            tick_interval,
        }
    }

    /// Deterministic ids and a one second tick.
    pub fn test() -> Self {
        Self {
            uuid: Arc::new(IncrementingUuidGenerator::new()),
            main_queue: Scheduler::new("test"),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppEnvironment")
            .field("main_queue", &self.main_queue)
            .field("tick_interval", &self.tick_interval)
            .finish_non_exhaustive()
    }
}
