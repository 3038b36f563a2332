//! Store runtime: owns state, serializes intents, runs effects.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::cancel::{CancellationRegistry, Liveness};
use super::effect::{CancelId, Effect, Emitter, RunFn};
use super::reducer::Reducer;

/// An intent waiting in the store queue, tagged with its sender's liveness.
struct Delivery<A> {
    intent: A,
    liveness: Liveness,
}

/// Effect tree flattened into the order the store applies it.
struct Plan<A> {
    cancels: Vec<CancelId>,
    dispatches: Vec<(Vec<CancelId>, A)>,
    runs: Vec<(Vec<CancelId>, RunFn<A>)>,
}

impl<A> Plan<A> {
    fn new() -> Self {
        Self {
            cancels: Vec::new(),
            dispatches: Vec::new(),
            runs: Vec::new(),
        }
    }

    fn collect(&mut self, effect: Effect<A>, scope: &mut Vec<CancelId>) {
        match effect {
            Effect::None => {}
            Effect::Dispatch(intent) => self.dispatches.push((scope.clone(), intent)),
            Effect::Run(run) => self.runs.push((scope.clone(), run)),
            Effect::Batch(effects) => {
                for effect in effects {
                    self.collect(effect, scope);
                }
            }
            Effect::Cancellable { id, effect } => {
                scope.push(id);
                self.collect(*effect, scope);
                scope.pop();
            }
            Effect::Cancel(id) => self.cancels.push(id),
        }
    }

    fn is_cancelled(&self, scope: &[CancelId]) -> bool {
        scope.iter().any(|id| self.cancels.contains(id))
    }
}

/// Owns a feature's state and is the only place it changes.
///
/// Intents are processed one at a time. Effects run on the ambient tokio
/// runtime and deliver intents back through the store's queue, which is
/// drained with [`Store::next`] or [`Store::drain_queued`]. Follow-up
/// intents keep the cancellation scope they were emitted under and are
/// dropped, like running tasks, once that scope is cancelled.
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    environment: R::Environment,
    registry: Arc<Mutex<CancellationRegistry>>,
    queue_tx: mpsc::UnboundedSender<Delivery<R::Intent>>,
    queue_rx: mpsc::UnboundedReceiver<Delivery<R::Intent>>,
    pending: VecDeque<(Vec<CancelId>, R::Intent)>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State, reducer: R, environment: R::Environment) -> Self {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        Self {
            state,
            reducer,
            environment,
            registry: Arc::new(Mutex::new(CancellationRegistry::new())),
            queue_tx,
            queue_rx,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn environment(&self) -> &R::Environment {
        &self.environment
    }

    /// Dispatch channel for views. Intents are queued, not processed inline.
    pub fn emitter(&self) -> Emitter<R::Intent> {
        let tx = self.queue_tx.clone();
        let liveness = Liveness::alive();
        Emitter::new(move |intent| {
            tx.send(Delivery {
                intent,
                liveness: liveness.clone(),
            })
            .is_ok()
        })
    }

    /// Read/dispatch view over the whole state.
    pub fn view(&self) -> ScopedStore<'_, R::State, R::Intent> {
        ScopedStore::new(&self.state, self.emitter())
    }

    /// Process an intent and all synchronous follow-ups to completion.
    pub fn send(&mut self, intent: R::Intent) {
        self.pending.push_back((Vec::new(), intent));
        while let Some((_, intent)) = self.pending.pop_front() {
            tracing::trace!(?intent, "reduce");
            let effect = self
                .reducer
                .reduce(&mut self.state, intent, &self.environment);
            self.interpret(effect);
        }
    }

    /// Wait for the next queued delivery and process it.
    ///
    /// Deliveries from cancelled effects are discarded. Cancel-safe: the only
    /// suspension point is the queue receive.
    pub async fn next(&mut self) -> R::Intent {
        loop {
            let Some(delivery) = self.queue_rx.recv().await else {
                // The store holds a sender, so the queue cannot close.
                std::future::pending::<()>().await;
                continue;
            };
            if let Some(intent) = self.accept(delivery) {
                return intent;
            }
        }
    }

    /// Process everything already queued without waiting.
    ///
    /// Returns how many deliveries were processed.
    pub fn drain_queued(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(delivery) = self.queue_rx.try_recv() {
            if self.accept(delivery).is_some() {
                processed += 1;
            }
        }
        processed
    }

    /// Number of effect tasks currently running.
    pub fn active_effects(&self) -> usize {
        self.registry.lock().active_tasks()
    }

    pub fn is_effect_active(&self, id: CancelId) -> bool {
        self.registry.lock().is_active(id)
    }

    fn accept(&mut self, delivery: Delivery<R::Intent>) -> Option<R::Intent> {
        if !delivery.liveness.is_alive() {
            tracing::trace!(intent = ?delivery.intent, "discarding delivery from cancelled effect");
            return None;
        }
        let intent = delivery.intent;
        self.send(intent.clone());
        Some(intent)
    }

    fn interpret(&mut self, effect: Effect<R::Intent>) {
        let mut plan = Plan::new();
        plan.collect(effect, &mut Vec::new());

        if !plan.cancels.is_empty() {
            let mut registry = self.registry.lock();
            for id in &plan.cancels {
                let stopped = registry.cancel(*id);
                tracing::debug!(%id, stopped, "cancelled effects");
            }
            drop(registry);

            let queued = self.pending.len();
            self.pending.retain(|(scope, _)| !plan.is_cancelled(scope));
            let dropped = queued - self.pending.len();
            if dropped > 0 {
                tracing::debug!(dropped, "queued follow-ups of cancelled scope dropped");
            }
        }

        for (scope, intent) in std::mem::take(&mut plan.dispatches) {
            if plan.is_cancelled(&scope) {
                tracing::debug!(?scope, ?intent, "follow-up of cancelled scope dropped");
                continue;
            }
            self.pending.push_back((scope, intent));
        }

        for (scope, run) in std::mem::take(&mut plan.runs) {
            if plan.is_cancelled(&scope) {
                tracing::debug!(?scope, "effect cancelled before it started");
                continue;
            }
            self.spawn(scope, run);
        }
    }

    fn spawn(&self, scope: Vec<CancelId>, run: RunFn<R::Intent>) {
        let (task, liveness) = self.registry.lock().register(&scope);
        let tx = self.queue_tx.clone();
        let gate = liveness.clone();
        let emitter = Emitter::new(move |intent| {
            if !gate.is_alive() {
                return false;
            }
            tx.send(Delivery {
                intent,
                liveness: gate.clone(),
            })
            .is_ok()
        });

        let future = run(emitter);
        let registry = Arc::clone(&self.registry);
        let handle = tokio::spawn(async move {
            future.await;
            registry.lock().release(task);
        });
        self.registry.lock().attach(task, handle.abort_handle());
        tracing::trace!(task, ?scope, "effect started");
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        let stopped = self.registry.lock().cancel_all();
        if stopped > 0 {
            tracing::debug!(stopped, "store dropped, effects cancelled");
        }
    }
}

/// Read access plus a dispatch channel over part of a store's state.
///
/// Child views receive one of these; they never own a copy of the state.
pub struct ScopedStore<'a, S, A> {
    state: &'a S,
    emitter: Emitter<A>,
}

impl<'a, S, A: Send + 'static> ScopedStore<'a, S, A> {
    pub fn new(state: &'a S, emitter: Emitter<A>) -> Self {
        Self { state, emitter }
    }

    pub fn state(&self) -> &'a S {
        self.state
    }

    pub fn send(&self, intent: A) -> bool {
        self.emitter.send(intent)
    }

    pub fn emitter(&self) -> Emitter<A> {
        self.emitter.clone()
    }

    /// Narrow to a child's state and intents.
    pub fn scope<C, CA, P, E>(&self, project: P, embed: E) -> ScopedStore<'a, C, CA>
    where
        CA: Send + 'static,
        P: FnOnce(&'a S) -> &'a C,
        E: Fn(CA) -> A + Send + Sync + 'static,
    {
        ScopedStore::new(project(self.state), self.emitter.scope(embed))
    }
}
