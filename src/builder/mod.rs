//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder, a plain-text transition parser
//! and a macro for declaring enum state types with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod parse;

pub use error::BuildError;
pub use machine::DfaBuilder;
pub use parse::{parse_transitions, TransitionLine};

use crate::automaton::Dfa;
use crate::core::{State, Symbol};

/// Build a completed automaton from `(source, symbol, target)` triples.
///
/// Every state and symbol mentioned is registered; the table is completed.
///
/// # Example
///
/// ```
/// use dfa_engine::builder::from_triples;
/// use dfa_engine::core::Acceptance;
///
/// let mut dfa = from_triples(0u32, [1u32], [(0, 'a', 1), (1, 'a', 0)]);
/// assert_eq!(dfa.accepts("a".chars()), Acceptance::Accepted);
/// assert_eq!(dfa.accepts("aa".chars()), Acceptance::Rejected);
/// ```
pub fn from_triples<S, A, IF, IT>(start: S, accept: IF, triples: IT) -> Dfa<S, A>
where
    S: State,
    A: Symbol,
    IF: IntoIterator<Item = S>,
    IT: IntoIterator<Item = (S, A, S)>,
{
    let mut dfa = Dfa::empty();
    for (source, symbol, target) in triples {
        dfa.add_transition(source, symbol, target);
    }
    for state in accept {
        dfa.add_state(state, true);
    }
    dfa.set_start(start);
    dfa.make_total();
    dfa.reset();
    dfa
}
