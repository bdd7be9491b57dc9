//! Builder for constructing automata.

use crate::automaton::{Completion, Dfa};
use crate::builder::error::BuildError;
use crate::builder::parse::parse_transitions;
use crate::core::{State, Symbol};
use crate::validation::Violation;
use std::collections::HashMap;

/// Builder for constructing automata with a fluent API.
///
/// Totality completion is on by default. Strict mode runs validation after
/// building and turns any violation into a [`BuildError`].
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::DfaBuilder;
/// use dfa_engine::core::Acceptance;
///
/// let mut dfa = DfaBuilder::<u8, char>::new()
///     .start(0u8)
///     .accept(1)
///     .transition(0, 'c', 1)
///     .transition(1, 'p', 0)
///     .strict(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.accepts("c".chars()), Acceptance::Accepted);
/// assert_eq!(dfa.accepts("cp".chars()), Acceptance::Rejected);
/// ```
pub struct DfaBuilder<S: State, A: Symbol> {
    states: Vec<S>,
    alphabet: Vec<A>,
    transitions: HashMap<S, HashMap<A, S>>,
    start: Option<S>,
    accept: Vec<S>,
    make_total: bool,
    strict: bool,
}

impl<S: State, A: Symbol> DfaBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: HashMap::new(),
            start: None,
            accept: Vec::new(),
            make_total: true,
            strict: false,
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare a symbol.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Declare several symbols at once.
    pub fn alphabet<I: IntoIterator<Item = A>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Add `source --symbol--> target`, overwriting an earlier entry for the
    /// same pair. The symbol joins the alphabet.
    pub fn transition(mut self, source: S, symbol: A, target: S) -> Self {
        self.alphabet.push(symbol.clone());
        self.transitions
            .entry(source)
            .or_default()
            .insert(symbol, target);
        self
    }

    /// Merge a nested `source -> (symbol -> target)` table.
    pub fn transitions(mut self, table: HashMap<S, HashMap<A, S>>) -> Self {
        for (source, row) in table {
            self.alphabet.extend(row.keys().cloned());
            self.transitions.entry(source).or_default().extend(row);
        }
        self
    }

    /// Set the start state.
    pub fn start(mut self, state: S) -> Self {
        self.states.push(state.clone());
        self.start = Some(state);
        self
    }

    /// Mark a state accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accept.push(state);
        self
    }

    /// Mark several states accepting.
    pub fn accepting<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accept.extend(states);
        self
    }

    /// Run totality completion on build (default `true`).
    pub fn make_total(mut self, make_total: bool) -> Self {
        self.make_total = make_total;
        self
    }

    /// Reject definitions with structural violations (default `false`).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the automaton.
    ///
    /// Fails in strict mode on any violation, and whenever completion was
    /// requested but no dead-state identifier is free.
    pub fn build(self) -> Result<Dfa<S, A>, BuildError> {
        let mut dfa = Dfa::new(
            self.states,
            self.alphabet,
            &self.transitions,
            self.start,
            self.accept,
            false,
        );

        if self.make_total {
            if let Completion::Unavailable { missing } = dfa.make_total() {
                return Err(BuildError::NoDeadState { missing });
            }
        }

        if self.strict {
            let violations = dfa.violations();
            if violations.contains(&Violation::MissingStart) {
                return Err(BuildError::MissingStart);
            }
            if !violations.is_empty() {
                return Err(BuildError::Invalid(
                    violations.iter().map(ToString::to_string).collect(),
                ));
            }
        }

        Ok(dfa)
    }
}

impl DfaBuilder<String, String> {
    /// Add every transition listed in `text`, one `source symbol target`
    /// triple per line.
    pub fn transition_lines(self, text: &str) -> Result<Self, BuildError> {
        let lines = parse_transitions(text)?;
        Ok(lines
            .into_iter()
            .fold(self, |builder, (source, symbol, target)| {
                builder.transition(source, symbol, target)
            }))
    }
}

impl<S: State, A: Symbol> Default for DfaBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Acceptance, StructurePhase};

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn builder_completes_by_default() {
        let dfa = DfaBuilder::<String, char>::new()
            .start(s("q0"))
            .alphabet(['a', 'b'])
            .transition(s("q0"), 'a', s("q1"))
            .build()
            .unwrap();

        assert!(dfa.is_total());
        assert_eq!(dfa.structure_phase(), StructurePhase::Completed);
        assert_eq!(dfa.dead_state(), Some(&s("__DEAD__")));
    }

    #[test]
    fn builder_can_skip_completion() {
        let dfa = DfaBuilder::<String, char>::new()
            .start(s("q0"))
            .alphabet(['a', 'b'])
            .transition(s("q0"), 'a', s("q1"))
            .make_total(false)
            .build()
            .unwrap();

        assert!(!dfa.is_total());
        assert_eq!(dfa.dead_state(), None);
    }

    #[test]
    fn strict_mode_requires_start() {
        let result = DfaBuilder::<String, char>::new()
            .transition(s("q0"), 'a', s("q0"))
            .strict(true)
            .build();

        assert!(matches!(result, Err(BuildError::MissingStart)));
    }

    #[test]
    fn strict_mode_rejects_unknown_accept_states() {
        let result = DfaBuilder::<String, char>::new()
            .start(s("q0"))
            .transition(s("q0"), 'a', s("q0"))
            .accept(s("ghost"))
            .strict(true)
            .build();

        match result {
            Err(BuildError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec!["Accept state \"ghost\" is not a known state".to_string()]
                );
            }
            other => panic!("Expected Invalid, got {:?}", other.map(|d| d.to_string())),
        }
    }

    #[test]
    fn strict_mode_rejects_partial_table_without_completion() {
        let result = DfaBuilder::<String, char>::new()
            .start(s("q0"))
            .alphabet(['a', 'b'])
            .transition(s("q0"), 'a', s("q0"))
            .make_total(false)
            .strict(true)
            .build();

        assert!(matches!(result, Err(BuildError::Invalid(v)) if v.len() == 1));
    }

    #[test]
    fn permissive_mode_tolerates_unknown_accept_states() {
        let mut dfa = DfaBuilder::<String, char>::new()
            .start(s("q0"))
            .transition(s("q0"), 'a', s("q0"))
            .accept(s("ghost"))
            .build()
            .unwrap();

        assert_eq!(dfa.accepts("aa".chars()), Acceptance::Rejected);
    }

    #[test]
    fn completion_fails_when_dead_variant_is_a_user_state() {
        crate::state_enum! {
            enum Valve {
                Closed,
                Open,
                Stuck,
            }
            dead: Stuck
        }

        let result = DfaBuilder::<Valve, char>::new()
            .start(Valve::Closed)
            .transition(Valve::Closed, 'o', Valve::Open)
            .transition(Valve::Open, 'j', Valve::Stuck)
            .build();

        assert_eq!(result.unwrap_err(), BuildError::NoDeadState { missing: 4 });

        let partial = DfaBuilder::<Valve, char>::new()
            .start(Valve::Closed)
            .transition(Valve::Closed, 'o', Valve::Open)
            .transition(Valve::Open, 'j', Valve::Stuck)
            .make_total(false)
            .build();
        assert!(partial.is_ok());
    }

    #[test]
    fn transitions_merge_nested_table() {
        let mut table: HashMap<String, HashMap<char, String>> = HashMap::new();
        table.entry(s("q0")).or_default().insert('a', s("q1"));
        table.entry(s("q1")).or_default().insert('a', s("q0"));

        let dfa = DfaBuilder::new()
            .start(s("q0"))
            .transitions(table)
            .build()
            .unwrap();

        assert_eq!(dfa.alphabet().len(), 1);
        assert_eq!(dfa.transition(&s("q1"), &'a'), Some(&s("q0")));
    }

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn transition_lines_build_string_automaton() {
        let mut dfa = DfaBuilder::<String, String>::new()
            .start(s("off"))
            .accept(s("on"))
            .transition_lines("off press on\non press off")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(dfa.accepts(words("press")), Acceptance::Accepted);
        assert_eq!(dfa.accepts(words("press press")), Acceptance::Rejected);
        assert_eq!(dfa.accepts(words("hold")), Acceptance::InvalidInput);
    }

    #[test]
    fn transition_lines_propagate_parse_errors() {
        let result = DfaBuilder::<String, String>::new().transition_lines("off press");
        assert!(matches!(result, Err(BuildError::Parse { line: 1, .. })));
    }
}
