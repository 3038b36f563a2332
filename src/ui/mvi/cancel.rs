//! Registry of running effect tasks keyed by cancellation id.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::AbortHandle;

use super::effect::CancelId;

/// Shared flag telling a task's emitter whether deliveries still count.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn alive() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn kill(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Handle for one spawned effect body.
pub type TaskId = u64;

struct RunningTask {
    ids: Vec<CancelId>,
    liveness: Liveness,
    abort: Option<AbortHandle>,
}

impl RunningTask {
    fn stop(self) {
        self.liveness.kill();
        if let Some(abort) = self.abort {
            abort.abort();
        }
    }
}

/// Tracks which tasks run under which cancellation ids.
///
/// A task is registered under every id that encloses it, so cancelling an
/// outer presentation also stops everything nested inside it.
#[derive(Default)]
pub struct CancellationRegistry {
    next_task: TaskId,
    tasks: HashMap<TaskId, RunningTask>,
    by_id: HashMap<CancelId, HashSet<TaskId>>,
}

impl CancellationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task about to be spawned under `ids`.
    pub fn register(&mut self, ids: &[CancelId]) -> (TaskId, Liveness) {
        let task = self.next_task;
        self.next_task = self.next_task.wrapping_add(1);
        let liveness = Liveness::alive();
        for id in ids {
            self.by_id.entry(*id).or_default().insert(task);
        }
        self.tasks.insert(
            task,
            RunningTask {
                ids: ids.to_vec(),
                liveness: liveness.clone(),
                abort: None,
            },
        );
        (task, liveness)
    }

    /// Attach the abort handle once the task is spawned.
    ///
    /// A task that already finished or was cancelled in between is aborted
    /// right away.
    pub fn attach(&mut self, task: TaskId, abort: AbortHandle) {
        match self.tasks.get_mut(&task) {
            Some(running) => running.abort = Some(abort),
            None => abort.abort(),
        }
    }

    /// Forget a task that ran to completion.
    pub fn release(&mut self, task: TaskId) {
        if let Some(running) = self.tasks.remove(&task) {
            self.unlink(task, &running.ids);
        }
    }

    /// Stop every task registered under `id`. Unknown ids are a no-op.
    ///
    /// Returns the number of tasks stopped.
    pub fn cancel(&mut self, id: CancelId) -> usize {
        let Some(tasks) = self.by_id.remove(&id) else {
            return 0;
        };
        let mut stopped = 0;
        for task in tasks {
            if let Some(running) = self.tasks.remove(&task) {
                self.unlink(task, &running.ids);
                running.stop();
                stopped += 1;
            }
        }
        stopped
    }

    /// Stop everything, used when the owning store goes away.
    pub fn cancel_all(&mut self) -> usize {
        let stopped = self.tasks.len();
        self.by_id.clear();
        for (_, running) in self.tasks.drain() {
            running.stop();
        }
        stopped
    }

    pub fn is_active(&self, id: CancelId) -> bool {
        self.by_id.get(&id).is_some_and(|tasks| !tasks.is_empty())
    }

    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }

    fn unlink(&mut self, task: TaskId, ids: &[CancelId]) {
        for id in ids {
            if let Some(tasks) = self.by_id.get_mut(id) {
                tasks.remove(&task);
                if tasks.is_empty() {
                    self.by_id.remove(id);
                }
            }
        }
    }
}
