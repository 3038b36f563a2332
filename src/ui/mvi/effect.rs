//! Side effects returned by reducers.
//!
//! A reducer never performs work itself. It describes the work as an
//! [`Effect`] and the [`Store`](super::Store) interprets it: follow-up intents
//! are processed immediately, async work runs on tokio and reports back
//! through an [`Emitter`], and cancellations are applied before anything else
//! from the same reduction starts.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use uuid::Uuid;

/// Future produced by a running effect.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Deferred body of an async effect: receives its emitter when started.
pub type RunFn<A> = Box<dyn FnOnce(Emitter<A>) -> BoxFuture + Send + 'static>;

/// Key that scopes the lifetime of running effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelId(Uuid);

impl CancelId {
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Uuid> for CancelId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for CancelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel through which a running effect delivers intents back into a store.
///
/// Emitters are also handed to views as their dispatch channel.
pub struct Emitter<A> {
    deliver: Arc<dyn Fn(A) -> bool + Send + Sync>,
}

impl<A> Clone for Emitter<A> {
    fn clone(&self) -> Self {
        Self {
            deliver: Arc::clone(&self.deliver),
        }
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").finish_non_exhaustive()
    }
}

impl<A: Send + 'static> Emitter<A> {
    pub fn new<F>(deliver: F) -> Self
    where
        F: Fn(A) -> bool + Send + Sync + 'static,
    {
        Self {
            deliver: Arc::new(deliver),
        }
    }

    /// Deliver an intent.
    ///
    /// Returns `false` once the effect was cancelled or the store is gone;
    /// long-running effects use this to stop themselves.
    pub fn send(&self, intent: A) -> bool {
        (self.deliver)(intent)
    }

    /// Derive an emitter for a child feature whose intents embed into `A`.
    pub fn scope<C, F>(&self, embed: F) -> Emitter<C>
    where
        C: Send + 'static,
        F: Fn(C) -> A + Send + Sync + 'static,
    {
        let parent = self.clone();
        Emitter::new(move |intent| parent.send(embed(intent)))
    }
}

/// Work requested by a reducer.
pub enum Effect<A> {
    /// Nothing to do.
    None,
    /// Feed another intent into the store right after the current one.
    Dispatch(A),
    /// Async work. It only talks to the store through its emitter.
    Run(RunFn<A>),
    /// Several effects, interpreted together.
    Batch(Vec<Effect<A>>),
    /// The inner effect's tasks are registered under `id`.
    Cancellable { id: CancelId, effect: Box<Effect<A>> },
    /// Cancel every task registered under `id`.
    Cancel(CancelId),
}

impl<A> Default for Effect<A> {
    fn default() -> Self {
        Effect::None
    }
}

impl<A: Send + 'static> Effect<A> {
    pub fn none() -> Self {
        Effect::None
    }

    pub fn dispatch(intent: A) -> Self {
        Effect::Dispatch(intent)
    }

    pub fn run<F, Fut>(body: F) -> Self
    where
        F: FnOnce(Emitter<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Effect::Run(Box::new(move |emitter| Box::pin(body(emitter))))
    }

    pub fn cancel(id: CancelId) -> Self {
        Effect::Cancel(id)
    }

    /// Combine effects, dropping empty ones.
    pub fn batch<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Effect<A>>,
    {
        let mut effects: Vec<Effect<A>> = effects.into_iter().filter(|e| !e.is_none()).collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }

    /// Register this effect's tasks under `id`.
    pub fn cancellable(self, id: CancelId) -> Self {
        if self.is_none() {
            return self;
        }
        Effect::Cancellable {
            id,
            effect: Box::new(self),
        }
    }

    /// Lift a child effect into the parent's intent type.
    pub fn map<B, F>(self, embed: F) -> Effect<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Dispatch(intent) => Effect::Dispatch(embed(intent)),
            Effect::Run(run) => Effect::Run(Box::new(move |emitter: Emitter<B>| {
                run(emitter.scope(embed))
            })),
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|effect| effect.map(embed.clone()))
                    .collect(),
            ),
            Effect::Cancellable { id, effect } => Effect::Cancellable {
                id,
                effect: Box::new(effect.map(embed)),
            },
            Effect::Cancel(id) => Effect::Cancel(id),
        }
    }
}

impl<A> Effect<A> {
    pub fn is_none(&self) -> bool {
        match self {
            Effect::None => true,
            Effect::Batch(effects) => effects.iter().all(Effect::is_none),
            Effect::Cancellable { effect, .. } => effect.is_none(),
            _ => false,
        }
    }

    /// Ids this effect cancels, in order.
    pub fn cancelled_ids(&self) -> Vec<CancelId> {
        let mut ids = Vec::new();
        self.visit(&mut |effect| {
            if let Effect::Cancel(id) = effect {
                ids.push(*id);
            }
        });
        ids
    }

    /// Ids this effect registers work under, outermost first.
    pub fn cancellable_ids(&self) -> Vec<CancelId> {
        let mut ids = Vec::new();
        self.visit(&mut |effect| {
            if let Effect::Cancellable { id, .. } = effect {
                ids.push(*id);
            }
        });
        ids
    }

    /// Intents dispatched synchronously by this effect.
    pub fn dispatched(&self) -> Vec<&A> {
        let mut intents = Vec::new();
        collect_dispatched(self, &mut intents);
        intents
    }

    /// Number of async bodies this effect would start.
    pub fn run_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |effect| {
            if matches!(effect, Effect::Run(_)) {
                count += 1;
            }
        });
        count
    }

    fn visit(&self, f: &mut dyn FnMut(&Effect<A>)) {
        f(self);
        match self {
            Effect::Batch(effects) => effects.iter().for_each(|effect| effect.visit(f)),
            Effect::Cancellable { effect, .. } => effect.visit(f),
            _ => {}
        }
    }
}

fn collect_dispatched<'a, A>(effect: &'a Effect<A>, out: &mut Vec<&'a A>) {
    match effect {
        Effect::Dispatch(intent) => out.push(intent),
        Effect::Batch(effects) => effects.iter().for_each(|e| collect_dispatched(e, out)),
        Effect::Cancellable { effect, .. } => collect_dispatched(effect, out),
        _ => {}
    }
}

impl<A: fmt::Debug> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Dispatch(intent) => f.debug_tuple("Dispatch").field(intent).finish(),
            Effect::Run(_) => f.write_str("Run(..)"),
            Effect::Batch(effects) => f.debug_list().entries(effects).finish(),
            Effect::Cancellable { id, effect } => f
                .debug_struct("Cancellable")
                .field("id", id)
                .field("effect", effect)
                .finish(),
            Effect::Cancel(id) => f.debug_tuple("Cancel").field(id).finish(),
        }
    }
}
