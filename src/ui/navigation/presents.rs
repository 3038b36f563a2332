//! Reducer combinator for a parent that presents a child through a slot.

use crate::ui::mvi::{Effect, Reducer};

use super::slot::PresentedSlot;

/// Runs a child reducer inside a parent's [`PresentedSlot`].
///
/// For every intent:
/// 1. a child intent is reduced against the slot's occupant (dropped if the
///    slot is empty) and its effects are keyed by the slot identity;
/// 2. the dismiss intent clears the slot;
/// 3. the parent reducer sees the intent;
/// 4. if the slot identity that was there before is gone, everything keyed
///    by it is cancelled. This covers dismissal, replacement, and
///    re-presentation, and since nested slots nest their keys it reaches
///    the whole retired subtree.
pub struct Presents<P, C>
where
    P: Reducer,
    C: Reducer<Environment = P::Environment>,
{
    parent: P,
    child: C,
    slot: fn(&mut P::State) -> &mut PresentedSlot<C::State>,
    extract: fn(&P::Intent) -> Option<C::Intent>,
    embed: fn(C::Intent) -> P::Intent,
    is_dismiss: fn(&P::Intent) -> bool,
}

impl<P, C> Presents<P, C>
where
    P: Reducer,
    C: Reducer<Environment = P::Environment>,
{
    pub fn new(
        parent: P,
        child: C,
        slot: fn(&mut P::State) -> &mut PresentedSlot<C::State>,
        extract: fn(&P::Intent) -> Option<C::Intent>,
        embed: fn(C::Intent) -> P::Intent,
        is_dismiss: fn(&P::Intent) -> bool,
    ) -> Self {
        Self {
            parent,
            child,
            slot,
            extract,
            embed,
            is_dismiss,
        }
    }

    fn reduce_child(
        &self,
        state: &mut P::State,
        intent: C::Intent,
        environment: &P::Environment,
    ) -> Effect<P::Intent> {
        let slot = (self.slot)(state);
        let (Some(id), Some(child)) = (slot.id(), slot.get_mut()) else {
            tracing::trace!(?intent, "child intent with nothing presented, ignored");
            return Effect::none();
        };
        self.child
            .reduce(child, intent, environment)
            .map(self.embed)
            .cancellable(id.into())
    }
}

impl<P, C> Reducer for Presents<P, C>
where
    P: Reducer,
    C: Reducer<Environment = P::Environment>,
{
    type State = P::State;
    type Intent = P::Intent;
    type Environment = P::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        intent: Self::Intent,
        environment: &Self::Environment,
    ) -> Effect<Self::Intent> {
        let before = (self.slot)(state).id();

        let child_effect = match (self.extract)(&intent) {
            Some(child_intent) => self.reduce_child(state, child_intent, environment),
            None => Effect::none(),
        };

        if (self.is_dismiss)(&intent) && (self.slot)(state).dismiss().is_none() {
            tracing::trace!("dismiss with nothing presented");
        }

        let parent_effect = self.parent.reduce(state, intent, environment);

        let after = (self.slot)(state).id();
        let retired = before.filter(|id| after != Some(*id));
        let cancel = match retired {
            Some(id) => {
                tracing::debug!(%id, "presentation retired, cancelling its effects");
                Effect::cancel(id.into())
            }
            None => Effect::none(),
        };

        Effect::batch([cancel, child_effect, parent_effect])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::AppEnvironment;
    use crate::ui::mvi::{CancelId, Intent, Store, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Leaf {
        hits: u32,
    }

    impl UiState for Leaf {}

    #[derive(Debug, Clone, PartialEq)]
    enum LeafIntent {
        Hit,
        Work,
        /// Answered with a follow-up `Hit`.
        Ping,
    }

    impl Intent for LeafIntent {}

    struct LeafReducer;

    impl Reducer for LeafReducer {
        type State = Leaf;
        type Intent = LeafIntent;
        type Environment = AppEnvironment;

        fn reduce(&self, state: &mut Leaf, intent: LeafIntent, _: &AppEnvironment) -> Effect<LeafIntent> {
            match intent {
                LeafIntent::Hit => {
                    state.hits += 1;
                    Effect::none()
                }
                LeafIntent::Work => Effect::run(|_| async {}),
                LeafIntent::Ping => Effect::dispatch(LeafIntent::Hit),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Host {
        child: PresentedSlot<Leaf>,
        dismissals_seen: u32,
    }

    impl UiState for Host {}

    #[derive(Debug, Clone, PartialEq)]
    enum HostIntent {
        Show,
        Child(LeafIntent),
        Dismiss,
    }

    impl Intent for HostIntent {}

    struct HostCore;

    impl Reducer for HostCore {
        type State = Host;
        type Intent = HostIntent;
        type Environment = AppEnvironment;

        fn reduce(&self, state: &mut Host, intent: HostIntent, env: &AppEnvironment) -> Effect<HostIntent> {
            match intent {
                HostIntent::Show => {
                    state.child.present(Leaf::default(), env.uuid.as_ref());
                }
                HostIntent::Dismiss => state.dismissals_seen += 1,
                // A ping swaps in a fresh child.
                HostIntent::Child(LeafIntent::Ping) => {
                    state.child.present(Leaf::default(), env.uuid.as_ref());
                }
                HostIntent::Child(_) => {}
            }
            Effect::none()
        }
    }

    fn host() -> Presents<HostCore, LeafReducer> {
        Presents::new(
            HostCore,
            LeafReducer,
            |s| &mut s.child,
            |i| match i {
                HostIntent::Child(c) => Some(c.clone()),
                _ => None,
            },
            HostIntent::Child,
            |i| matches!(i, HostIntent::Dismiss),
        )
    }

    #[test]
    fn first_presentation_cancels_nothing() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let effect = host().reduce(&mut state, HostIntent::Show, &env);

        assert!(state.child.is_presented());
        assert!(effect.cancelled_ids().is_empty());
    }

    #[test]
    fn replacement_cancels_previous_identity() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let reducer = host();
        reducer.reduce(&mut state, HostIntent::Show, &env);
        let first = state.child.id().map(CancelId::from);

        let effect = reducer.reduce(&mut state, HostIntent::Show, &env);
        assert_eq!(effect.cancelled_ids(), first.into_iter().collect::<Vec<_>>());
        assert_ne!(state.child.id().map(CancelId::from), first);
    }

    #[test]
    fn dismiss_clears_slot_and_reaches_parent() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let reducer = host();
        reducer.reduce(&mut state, HostIntent::Show, &env);
        let id = state.child.id().map(CancelId::from);

        let effect = reducer.reduce(&mut state, HostIntent::Dismiss, &env);
        assert!(!state.child.is_presented());
        assert_eq!(state.dismissals_seen, 1);
        assert_eq!(effect.cancelled_ids(), id.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn child_intents_reach_occupant() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let reducer = host();
        reducer.reduce(&mut state, HostIntent::Show, &env);
        reducer.reduce(&mut state, HostIntent::Child(LeafIntent::Hit), &env);

        assert_eq!(state.child.get().map(|leaf| leaf.hits), Some(1));
    }

    #[test]
    fn child_intent_without_occupant_is_dropped() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let effect = host().reduce(&mut state, HostIntent::Child(LeafIntent::Work), &env);

        assert!(effect.is_none());
        assert_eq!(state, Host::default());
    }

    #[test]
    fn child_effects_are_keyed_by_slot_identity() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let reducer = host();
        reducer.reduce(&mut state, HostIntent::Show, &env);
        let id = state.child.id().map(CancelId::from);

        let effect = reducer.reduce(&mut state, HostIntent::Child(LeafIntent::Work), &env);
        assert_eq!(effect.cancellable_ids(), id.into_iter().collect::<Vec<_>>());
        assert_eq!(effect.run_count(), 1);
    }

    #[test]
    fn dismiss_with_empty_slot_cancels_nothing() {
        let env = AppEnvironment::test();
        let mut state = Host::default();
        let effect = host().reduce(&mut state, HostIntent::Dismiss, &env);
        assert!(effect.cancelled_ids().is_empty());
    }

    #[test]
    fn follow_up_of_replaced_child_never_reaches_its_successor() {
        let mut store = Store::new(Host::default(), host(), AppEnvironment::test());
        store.send(HostIntent::Show);
        let first = store.state().child.id();

        store.send(HostIntent::Child(LeafIntent::Ping));
        assert_ne!(store.state().child.id(), first);
        assert_eq!(store.state().child.get().map(|leaf| leaf.hits), Some(0));
    }
}
