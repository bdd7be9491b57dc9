//! Core automaton types.
//!
//! This module contains the vocabulary the engine is written in:
//! - Identifier traits for states and symbols
//! - Tagged step and acceptance results
//! - Run traces

mod history;
mod outcome;
mod state;

pub use history::{RunTrace, TraceError, TraceStep};
pub use outcome::{Acceptance, SimulationPhase, Step, StructurePhase};
pub use state::{State, Symbol, DEAD_STATE_NAME};
