//! The automaton engine.
//!
//! This module owns the DFA itself:
//! - Construction from an explicit definition or incrementally
//! - Totality completion with a synthesized dead state
//! - Simulation through the engine's own cursor or borrowed [`Cursor`]s
//!
//! Simulation never fails. Out-of-alphabet symbols and missing cursors come
//! back as [`crate::core::Step`] and [`crate::core::Acceptance`] variants.

mod complete;
mod cursor;
mod dfa;
mod simulate;

pub use complete::Completion;
pub use cursor::Cursor;
pub use dfa::Dfa;
