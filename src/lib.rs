//! dfa-engine: a deterministic finite automaton engine
//!
//! The engine stores a transition table over a fixed alphabet and simulates
//! runs against sequences of symbols. Partial tables can be completed to a
//! total transition function with a synthesized, absorbing dead state.
//!
//! # Core Concepts
//!
//! - **State / Symbol**: opaque, hashable identifiers via the `State` and `Symbol` traits
//! - **Dfa**: the structural definition plus a live simulation cursor
//! - **Step / Acceptance**: tagged results instead of nullable sentinels
//! - **Snapshot**: canonical, cursor-free structural export
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::automaton::Dfa;
//! use dfa_engine::core::{Acceptance, Step};
//! use std::collections::HashMap;
//!
//! let mut transitions: HashMap<String, HashMap<char, String>> = HashMap::new();
//! for (from, symbol, to) in [
//!     ("q0", 'a', "q1"),
//!     ("q0", 'b', "q0"),
//!     ("q1", 'a', "q1"),
//!     ("q1", 'b', "q2"),
//!     ("q2", 'a', "q1"),
//!     ("q2", 'b', "q0"),
//! ] {
//!     transitions
//!         .entry(from.to_string())
//!         .or_default()
//!         .insert(symbol, to.to_string());
//! }
//!
//! let mut dfa = Dfa::new(
//!     ["q0", "q1", "q2"].map(String::from),
//!     ['a', 'b'],
//!     &transitions,
//!     Some("q0".to_string()),
//!     ["q2".to_string()],
//!     true,
//! );
//!
//! assert_eq!(dfa.accepts("aab".chars()), Acceptance::Accepted);
//! assert_eq!(dfa.accepts("aba".chars()), Acceptance::Rejected);
//! assert_eq!(dfa.accepts("ac".chars()), Acceptance::InvalidInput);
//! assert_eq!(dfa.run("".chars()), Step::Valid("q0".to_string()));
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use automaton::{Completion, Cursor, Dfa};
pub use builder::{BuildError, DfaBuilder};
pub use crate::core::{Acceptance, RunTrace, State, Step, Symbol};
pub use snapshot::{Checkpoint, Snapshot, SnapshotError};
pub use validation::Violation;
