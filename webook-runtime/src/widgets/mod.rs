//! Reference state machines for the stateful widgets.
//!
//! Each type mirrors the handler of the same name under `assets/`. Handlers
//! hold their state per element, so no state is shared between widgets.

pub mod checklist;
pub mod countdown;
pub mod flashcards;
pub mod matching;
pub mod poll;
pub mod quiz;
pub mod rating;
pub mod sortable;
pub mod toggle;
