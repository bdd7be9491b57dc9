//! Accumulating structural validation.
//!
//! Uses Stillwater's `Validation` to collect every violation in one pass
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::automaton::Dfa;
//! use dfa_engine::validation::{validate, Violation};
//! use stillwater::validation::Validation;
//!
//! let mut dfa: Dfa<String, char> = Dfa::empty();
//! dfa.add_transition("q0".to_string(), 'a', "q1".to_string());
//!
//! match validate(&dfa) {
//!     Validation::Failure(violations) => {
//!         assert!(violations.iter().any(|v| matches!(v, Violation::MissingStart)));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod violations;

pub use violations::Violation;

use crate::automaton::Dfa;
use crate::core::{State, Symbol};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating an automaton.
pub type ValidationResult<S, A> = Validation<(), NonEmptyVec<Violation<S, A>>>;

/// Run every structural check, accumulating ALL violations.
///
/// Checks, in order: start state set and known, accept states known,
/// table total.
pub fn validate<S: State, A: Symbol>(dfa: &Dfa<S, A>) -> ValidationResult<S, A> {
    let mut checks: Vec<ValidationResult<S, A>> = vec![check_start(dfa)];

    let mut accept: Vec<&S> = dfa.accept().iter().collect();
    accept.sort();
    for state in accept {
        let check = if dfa.states().contains(state) {
            Validation::success(())
        } else {
            Validation::fail(Violation::AcceptNotInStates {
                state: state.clone(),
            })
        };
        checks.push(check);
    }

    for (state, symbol) in dfa.missing_transitions() {
        checks.push(Validation::fail(Violation::MissingTransition {
            state: state.clone(),
            symbol: symbol.clone(),
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_start<S: State, A: Symbol>(dfa: &Dfa<S, A>) -> ValidationResult<S, A> {
    match dfa.start() {
        None => Validation::fail(Violation::MissingStart),
        Some(start) if !dfa.states().contains(start) => {
            Validation::fail(Violation::StartNotInStates {
                state: start.clone(),
            })
        }
        Some(_) => Validation::success(()),
    }
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Every violation found by [`validate`], empty when the definition is sound.
    pub fn violations(&self) -> Vec<Violation<S, A>> {
        match validate(self) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(violations) => violations.iter().cloned().collect(),
        }
    }
}
