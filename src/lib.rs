//! Recursive, state-driven navigation for a terminal UI.
//!
//! Screens form one recursive type ([`ui::screen::ScreenState`]). A parent
//! presents a child by filling a [`ui::navigation::PresentedSlot`]; a
//! per-call-site resolver picks push, sheet, or full-screen cover; and
//! clearing or replacing a slot cancels every effect the retired subtree
//! started.

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod ui;
