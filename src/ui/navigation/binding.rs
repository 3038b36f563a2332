//! Binds a presented slot to the canvas presentation primitives.

use std::fmt;
use std::sync::Arc;

use crate::ui::canvas::Canvas;
use crate::ui::mvi::{Emitter, ScopedStore};

use super::presentation::{NavigationPlacement, PresentationType, Resolver};
use super::slot::PresentedSlot;

type DismissFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Boolean gate handed to one presentation primitive.
///
/// Reading it tells the primitive whether it is active. Writing `false`
/// (the user's dismissal gesture) dispatches the parent's dismiss intent;
/// the slot itself is only ever cleared by the reducer.
#[derive(Clone)]
pub struct IsPresented {
    active: bool,
    on_dismiss: DismissFn,
}

impl IsPresented {
    pub fn new<A>(active: bool, emitter: Emitter<A>, dismiss: A) -> Self
    where
        A: Clone + Send + Sync + 'static,
    {
        Self {
            active,
            on_dismiss: Arc::new(move || emitter.send(dismiss.clone())),
        }
    }

    pub fn get(&self) -> bool {
        self.active
    }

    /// Returns whether a dismiss intent was dispatched.
    pub fn set(&self, presented: bool) -> bool {
        if presented || !self.active {
            return false;
        }
        tracing::trace!("dismiss gesture");
        (self.on_dismiss)()
    }

    pub(crate) fn dismiss_handle(&self) -> DismissFn {
        let gate = self.clone();
        Arc::new(move || gate.set(false))
    }
}

impl fmt::Debug for IsPresented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsPresented")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// One call site's presentation of a child slot.
///
/// Every render draws the parent content and then invokes all three
/// primitives, each gated on "slot occupied and resolved style is mine".
/// The style is resolved on every call, so a state change that flips the
/// style moves the child to the other primitive on the next frame.
pub struct PresentationBinding<'s, 'a, S, A, C, CA> {
    store: &'s ScopedStore<'a, S, A>,
    slot: fn(&S) -> &PresentedSlot<C>,
    embed: fn(CA) -> A,
    dismiss: A,
    resolve: Resolver<C>,
}

impl<'s, 'a, S, A, C, CA> PresentationBinding<'s, 'a, S, A, C, CA>
where
    S: 'a,
    C: 'a,
    A: Clone + Send + Sync + 'static,
    CA: Send + 'static,
{
    pub fn new(
        store: &'s ScopedStore<'a, S, A>,
        slot: fn(&S) -> &PresentedSlot<C>,
        embed: fn(CA) -> A,
        dismiss: A,
        resolve: Resolver<C>,
    ) -> Self {
        Self {
            store,
            slot,
            embed,
            dismiss,
            resolve,
        }
    }

    /// Style of the current occupant, `None` while the slot is empty.
    pub fn style(&self) -> Option<PresentationType> {
        self.occupant().map(self.resolve)
    }

    pub fn is_presented(&self) -> bool {
        self.occupant().is_some()
    }

    pub fn render<F, D>(&self, canvas: &mut Canvas<'_>, content: F, destination: D)
    where
        F: FnOnce(&mut Canvas<'_>),
        D: Fn(PresentationType, ScopedStore<'a, C, CA>, &mut Canvas<'_>),
    {
        content(canvas);

        let style = self.style();
        let placement = style
            .and_then(|style| style.placement())
            .unwrap_or(NavigationPlacement::Detail);
        let navigation = self.gate(style.is_some_and(|style| style.is_navigation()));
        let sheet = self.gate(style == Some(PresentationType::Sheet));
        let cover = self.gate(style == Some(PresentationType::FullScreenCover));

        canvas.push_destination(placement, &navigation, |canvas| {
            self.materialize(canvas, &destination)
        });
        canvas.sheet(&sheet, |canvas| self.materialize(canvas, &destination));
        canvas.full_screen_cover(&cover, |canvas| self.materialize(canvas, &destination));
    }

    fn occupant(&self) -> Option<&'a C> {
        (self.slot)(self.store.state()).get()
    }

    fn gate(&self, active: bool) -> IsPresented {
        IsPresented::new(active, self.store.emitter(), self.dismiss.clone())
    }

    fn materialize<D>(&self, canvas: &mut Canvas<'_>, destination: &D)
    where
        D: Fn(PresentationType, ScopedStore<'a, C, CA>, &mut Canvas<'_>),
    {
        let Some(child) = self.occupant() else {
            canvas.placeholder();
            return;
        };
        let style = (self.resolve)(child);
        let store = ScopedStore::new(child, self.store.emitter().scope(self.embed));
        destination(style, store, canvas);
    }
}

/// Run `content` inside the navigation context a presentation style needs.
///
/// Modal styles start a fresh navigation container so the presented screen
/// can push its own destinations. Push navigation reuses the current one.
pub fn in_presentation_context<F>(canvas: &mut Canvas<'_>, style: PresentationType, content: F)
where
    F: FnOnce(&mut Canvas<'_>),
{
    if style.starts_navigation_context() {
        canvas.navigation_container(content);
    } else {
        content(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recorder() -> (Emitter<u8>, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let emitter = Emitter::new(move |intent| {
            sink.lock().push(intent);
            true
        });
        (emitter, seen)
    }

    #[test]
    fn setting_false_on_active_gate_dispatches_dismiss() {
        let (emitter, seen) = recorder();
        let gate = IsPresented::new(true, emitter, 7);

        assert!(gate.set(false));
        assert_eq!(*seen.lock(), vec![7]);
        assert!(gate.get());
    }

    #[test]
    fn inactive_gate_ignores_dismiss() {
        let (emitter, seen) = recorder();
        let gate = IsPresented::new(false, emitter, 7);

        assert!(!gate.set(false));
        assert!(!gate.set(true));
        assert!(seen.lock().is_empty());
    }
}
