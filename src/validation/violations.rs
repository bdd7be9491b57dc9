//! Structural violations reported by validation.

use crate::core::{State, Symbol};
use thiserror::Error;

/// A structural problem in an automaton definition.
///
/// None of these stop the engine from simulating; they describe why a
/// definition may not behave as its author intended.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation<S: State, A: Symbol> {
    #[error("No start state is set")]
    MissingStart,

    #[error("Start state {state:?} is not a known state")]
    StartNotInStates { state: S },

    #[error("Accept state {state:?} is not a known state")]
    AcceptNotInStates { state: S },

    #[error("No transition from {state:?} on {symbol:?}")]
    MissingTransition { state: S, symbol: A },
}
