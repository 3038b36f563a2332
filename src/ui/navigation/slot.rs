//! Presented-state slot.

use std::fmt;

use uuid::Uuid;

use crate::environment::UuidGenerator;
use crate::ui::mvi::CancelId;

/// Identity of one presentation instance.
///
/// Minted on every `present`, so re-presenting an equal value is still a new
/// instance. Effects started inside the slot are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationId(Uuid);

impl PresentationId {
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PresentationId> for CancelId {
    fn from(id: PresentationId) -> Self {
        CancelId::new(id.0)
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional child state owned by a parent: "a child is shown here, or not".
///
/// The payload is boxed, which is what lets a screen type contain a slot of
/// itself. Equality compares both value and identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedSlot<T> {
    value: Option<Box<T>>,
    id: Option<PresentationId>,
}

impl<T> Default for PresentedSlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> PresentedSlot<T> {
    pub const fn empty() -> Self {
        Self {
            value: None,
            id: None,
        }
    }

    /// Slot already holding `value` under a known identity.
    pub fn with_id(value: T, id: PresentationId) -> Self {
        Self {
            value: Some(Box::new(value)),
            id: Some(id),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_deref()
    }

    /// In-place access for the child's own reducer. Keeps identity.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_deref_mut()
    }

    pub fn id(&self) -> Option<PresentationId> {
        self.id
    }

    pub fn is_presented(&self) -> bool {
        self.value.is_some()
    }

    /// Show `value`, replacing any current occupant with a new identity.
    pub fn present(&mut self, value: T, ids: &dyn UuidGenerator) -> PresentationId {
        let id = PresentationId::new(ids.generate());
        if let Some(previous) = self.id {
            tracing::debug!(%previous, next = %id, "presentation replaced");
        } else {
            tracing::debug!(%id, "presentation shown");
        }
        self.value = Some(Box::new(value));
        self.id = Some(id);
        id
    }

    /// Clear the slot, returning the retired occupant.
    pub fn dismiss(&mut self) -> Option<T> {
        if let Some(id) = self.id.take() {
            tracing::debug!(%id, "presentation dismissed");
        }
        self.value.take().map(|value| *value)
    }

    /// `present` for `Some`, `dismiss` for `None`.
    pub fn set(&mut self, value: Option<T>, ids: &dyn UuidGenerator) {
        match value {
            Some(value) => {
                self.present(value, ids);
            }
            None => {
                self.dismiss();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::IncrementingUuidGenerator;

    #[test]
    fn starts_empty() {
        let slot: PresentedSlot<u8> = PresentedSlot::default();
        assert!(!slot.is_presented());
        assert_eq!(slot.id(), None);
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn re_presenting_equal_value_mints_new_identity() {
        let ids = IncrementingUuidGenerator::new();
        let mut slot = PresentedSlot::empty();
        let first = slot.present(3, &ids);
        let second = slot.present(3, &ids);

        assert_ne!(first, second);
        assert_eq!(slot.get(), Some(&3));
        assert_eq!(slot.id(), Some(second));
    }

    #[test]
    fn in_place_mutation_keeps_identity() {
        let ids = IncrementingUuidGenerator::new();
        let mut slot = PresentedSlot::empty();
        let id = slot.present(1, &ids);
        if let Some(value) = slot.get_mut() {
            *value += 1;
        }

        assert_eq!(slot.get(), Some(&2));
        assert_eq!(slot.id(), Some(id));
    }

    #[test]
    fn dismiss_returns_occupant_and_clears_identity() {
        let ids = IncrementingUuidGenerator::new();
        let mut slot = PresentedSlot::empty();
        slot.present("child", &ids);

        assert_eq!(slot.dismiss(), Some("child"));
        assert!(!slot.is_presented());
        assert_eq!(slot.id(), None);
        assert_eq!(slot.dismiss(), None);
    }

    #[test]
    fn set_none_dismisses() {
        let ids = IncrementingUuidGenerator::new();
        let mut slot = PresentedSlot::empty();
        slot.set(Some(5), &ids);
        assert!(slot.is_presented());
        slot.set(None, &ids);
        assert_eq!(slot, PresentedSlot::empty());
    }

    #[test]
    fn equality_includes_identity() {
        let a = PresentedSlot::with_id(1, PresentationId::new(Uuid::from_u128(1)));
        let b = PresentedSlot::with_id(1, PresentationId::new(Uuid::from_u128(2)));
        assert_ne!(a, b);
    }
}
