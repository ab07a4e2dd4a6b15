//! Game events and observers.
//!
//! The turn engine reports everything that happens as a `GameEvent`.
//! Observers registered on the game receive every event in order; the
//! console text and the `tracing` output are produced alongside.

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, SharedEventLog};
