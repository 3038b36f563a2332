//! Presentation framework for recursive, state-driven navigation.
//!
//! - `presentation.rs` - Presentation styles and per-call-site resolvers
//! - `slot.rs` - Optional child state owned by a parent, with identity
//! - `presents.rs` - Reducer combinator routing into a slot and cancelling
//!   the effects of retired presentations
//! - `binding.rs` - View-side binding that drives the three presentation
//!   primitives of the canvas from a slot

mod binding;
mod presentation;
mod presents;
mod slot;

pub use binding::{in_presentation_context, IsPresented, PresentationBinding};
pub use presentation::{NavigationPlacement, PresentationType, Resolver};
pub use presents::Presents;
pub use slot::{PresentationId, PresentedSlot};
