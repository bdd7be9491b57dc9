//! Build errors for the automaton builder and transition parser.

use thiserror::Error;

/// Errors that can occur when building automata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build() in strict mode")]
    MissingStart,

    #[error("Automaton failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("No unused identifier for a dead state; {missing} transitions stay undefined")]
    NoDeadState { missing: usize },

    #[error("Line {line}: {reason} (got {content:?})")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}
