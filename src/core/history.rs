//! Run trace tracking.
//!
//! A trace records every step a traced run takes, so a presentation layer
//! can render an event log without re-deriving it from the table.

use super::outcome::Step;
use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record of a single consumed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraceStep<S: State, A: Symbol> {
    /// The state the symbol was consumed in
    pub from: S,
    /// The consumed symbol
    pub symbol: A,
    /// The reached state; `None` when the table had no entry
    pub to: Option<S>,
}

/// Ordered trace of a single run.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{RunTrace, TraceStep};
///
/// let trace: RunTrace<String, char> = RunTrace::new(Some("q0".to_string()))
///     .record(TraceStep {
///         from: "q0".to_string(),
///         symbol: 'a',
///         to: Some("q1".to_string()),
///     });
///
/// let path = trace.path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1], &"q1".to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunTrace<S: State, A: Symbol> {
    start: Option<S>,
    steps: Vec<TraceStep<S, A>>,
}

impl<S: State, A: Symbol> RunTrace<S, A> {
    /// Create an empty trace beginning at `start`.
    pub fn new(start: Option<S>) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Record a step, returning the extended trace.
    pub fn record(mut self, step: TraceStep<S, A>) -> Self {
        self.steps.push(step);
        self
    }

    /// The state the run started in.
    pub fn start(&self) -> Option<&S> {
        self.start.as_ref()
    }

    /// Get all recorded steps in order.
    pub fn steps(&self) -> &[TraceStep<S, A>] {
        &self.steps
    }

    /// Get the path of states traversed.
    ///
    /// Returns the start state followed by every reached state. The path
    /// stops at the first step that left the cursor unset.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        let Some(start) = self.start.as_ref() else {
            return path;
        };
        path.push(start);
        for step in &self.steps {
            match step.to.as_ref() {
                Some(to) => path.push(to),
                None => break,
            }
        }
        path
    }

    /// The consumed symbols in order.
    pub fn symbols(&self) -> Vec<&A> {
        self.steps.iter().map(|step| &step.symbol).collect()
    }

    /// Final outcome of the traced run.
    pub fn outcome(&self) -> Step<S> {
        let last = match self.steps.last() {
            Some(step) => step.to.clone(),
            None => self.start.clone(),
        };
        match last {
            Some(state) => Step::Valid(state),
            None => Step::Unset,
        }
    }
}

/// Errors from a traced run.
#[derive(Debug, Error)]
pub enum TraceError<S: State, A: Symbol> {
    /// A symbol outside the alphabet aborted the run.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol {
        position: usize,
        symbol: A,
        /// Steps taken before the invalid symbol
        partial: Box<RunTrace<S, A>>,
    },
}
