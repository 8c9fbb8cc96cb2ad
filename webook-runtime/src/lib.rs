//! Embedded widget runtime for webook artifacts.
//!
//! Two halves live here. `assets/` holds the JavaScript modules bundled into
//! every artifact; [`ScriptBundle`] selects and orders them. The Rust modules
//! are the reference state machines those scripts implement (the compiler
//! renders initial state from them, and `webook-render/tests/runtime_tests.rs`
//! runs the scripts and checks them step by step against them), plus the seeded
//! functions the compiler uses to precompute everything random-looking
//! (simulated poll results, shuffled orders) so the artifact itself never
//! draws a random number.

pub mod bundle;
pub mod nav;
pub mod seed;
pub mod widgets;

pub use bundle::{Behavior, RuntimeError, ScriptBundle};
pub use nav::{NavState, Step};
pub use seed::{draw, permutation};
pub use widgets::checklist::ChecklistState;
pub use widgets::countdown::days_remaining;
pub use widgets::flashcards::FlashcardDeck;
pub use widgets::matching::{MatchOutcome, MatchingState};
pub use widgets::poll::{distribution_matrix, simulate_distribution, PollState};
pub use widgets::quiz::{Mark, QuizState};
pub use widgets::rating::RatingState;
pub use widgets::sortable::SortableState;
pub use widgets::toggle::ToggleState;
