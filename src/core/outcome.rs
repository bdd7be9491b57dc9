//! Tagged results of simulation calls.
//!
//! The engine never reports a bad input symbol or a missing cursor as an
//! error. Those cases are ordinary outcomes that the caller matches on.

use serde::{Deserialize, Serialize};

/// Result of consuming one symbol, or a whole sequence.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Step;
///
/// let step: Step<String> = Step::Valid("q1".to_string());
/// assert!(step.is_valid());
/// assert_eq!(step.state(), Some(&"q1".to_string()));
///
/// let invalid: Step<String> = Step::Invalid;
/// assert_eq!(invalid.into_state(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step<S> {
    /// The cursor moved to (or, for a run, finished in) this state.
    Valid(S),

    /// The symbol is not part of the alphabet.
    Invalid,

    /// There is no current state: either no start state was set, or the
    /// table had no entry for the (state, symbol) pair.
    Unset,
}

impl<S> Step<S> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Borrow the reached state, if any.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::Valid(state) => Some(state),
            Self::Invalid | Self::Unset => None,
        }
    }

    pub fn into_state(self) -> Option<S> {
        match self {
            Self::Valid(state) => Some(state),
            Self::Invalid | Self::Unset => None,
        }
    }
}

/// Three-valued acceptance result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acceptance {
    Accepted,
    Rejected,

    /// The sequence contained a symbol outside the alphabet, or the run
    /// ended with no current state.
    InvalidInput,
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Collapse to a plain boolean, `None` for invalid input or an unset run.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Accepted => Some(true),
            Self::Rejected => Some(false),
            Self::InvalidInput => None,
        }
    }
}

/// Where the simulation cursor stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationPhase {
    /// The cursor sits on the start state and nothing has been consumed.
    Reset,

    /// At least one symbol has been consumed.
    Running,

    /// An out-of-alphabet symbol was seen. Only `reset` or `run` leave this phase.
    Invalid,
}

/// Structural lifecycle of the definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructurePhase {
    /// The table may be partial.
    Building,

    /// Totality completion ran and nothing was mutated since.
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_accessors() {
        let valid = Step::Valid(3u32);
        assert!(valid.is_valid());
        assert!(!valid.is_invalid());
        assert_eq!(valid.state(), Some(&3));
        assert_eq!(valid.into_state(), Some(3));

        let invalid: Step<u32> = Step::Invalid;
        assert!(invalid.is_invalid());
        assert_eq!(invalid.state(), None);

        let unset: Step<u32> = Step::Unset;
        assert!(!unset.is_valid());
        assert!(!unset.is_invalid());
        assert_eq!(unset.into_state(), None);
    }

    #[test]
    fn acceptance_as_bool() {
        assert_eq!(Acceptance::Accepted.as_bool(), Some(true));
        assert_eq!(Acceptance::Rejected.as_bool(), Some(false));
        assert_eq!(Acceptance::InvalidInput.as_bool(), None);
        assert!(Acceptance::Accepted.is_accepted());
        assert!(!Acceptance::InvalidInput.is_accepted());
    }

    #[test]
    fn step_serializes_correctly() {
        let step = Step::Valid("q2".to_string());
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: Step<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
