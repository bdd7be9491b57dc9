//! The automaton definition and its construction.

use super::simulate::Position;
use crate::core::{State, StructurePhase, Symbol};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Deterministic finite automaton over states `S` and symbols `A`.
///
/// The structural definition (states, alphabet, table, start, accept set)
/// and the live simulation cursor are independent: simulating only moves
/// the cursor, so one definition can be reset and re-run any number of
/// times.
///
/// # Example
///
/// ```rust
/// use dfa_engine::automaton::Dfa;
/// use std::collections::HashMap;
///
/// let mut transitions: HashMap<String, HashMap<char, String>> = HashMap::new();
/// transitions
///     .entry("even".to_string())
///     .or_default()
///     .insert('1', "odd".to_string());
/// transitions
///     .entry("odd".to_string())
///     .or_default()
///     .insert('1', "even".to_string());
///
/// let mut parity = Dfa::new(
///     ["even".to_string()],
///     ['0', '1'],
///     &transitions,
///     Some("even".to_string()),
///     ["even".to_string()],
///     true,
/// );
///
/// // '0' had no entries, so completion routed it to the dead state.
/// assert!(parity.is_total());
/// assert!(parity.accepts("11".chars()).is_accepted());
/// assert!(!parity.accepts("10".chars()).is_accepted());
/// ```
#[derive(Clone, Debug)]
pub struct Dfa<S: State, A: Symbol> {
    pub(crate) states: HashSet<S>,
    pub(crate) alphabet: HashSet<A>,
    pub(crate) transitions: HashMap<S, HashMap<A, S>>,
    pub(crate) start: Option<S>,
    pub(crate) accept: HashSet<S>,
    pub(crate) dead: Option<S>,
    pub(crate) structure: StructurePhase,
    pub(crate) position: Position<S>,
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Build an automaton from an explicit definition.
    ///
    /// The transition table is deep copied. Any state that only appears
    /// as a transition source or target joins `states`. When `make_total`
    /// is set, totality completion runs after the table is assembled; if no
    /// dead-state identifier is free the table simply stays partial.
    /// Never fails: empty or inconsistent inputs give a degenerate but
    /// usable automaton.
    pub fn new<IS, IA, IF>(
        states: IS,
        alphabet: IA,
        transitions: &HashMap<S, HashMap<A, S>>,
        start: Option<S>,
        accept: IF,
        make_total: bool,
    ) -> Self
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IF: IntoIterator<Item = S>,
    {
        let mut dfa = Self::empty();
        dfa.states.extend(states);
        dfa.alphabet.extend(alphabet);
        dfa.accept.extend(accept);
        dfa.start = start;

        for (source, row) in transitions {
            dfa.states.insert(source.clone());
            dfa.states.extend(row.values().cloned());
            dfa.transitions.insert(source.clone(), row.clone());
        }

        if make_total {
            dfa.make_total();
        }

        dfa.reset();
        dfa
    }

    /// Build with totality completion enabled.
    pub fn from_components<IS, IA, IF>(
        states: IS,
        alphabet: IA,
        transitions: &HashMap<S, HashMap<A, S>>,
        start: Option<S>,
        accept: IF,
    ) -> Self
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IF: IntoIterator<Item = S>,
    {
        Self::new(states, alphabet, transitions, start, accept, true)
    }

    /// A blank automaton for incremental construction.
    pub fn empty() -> Self {
        Self {
            states: HashSet::new(),
            alphabet: HashSet::new(),
            transitions: HashMap::new(),
            start: None,
            accept: HashSet::new(),
            dead: None,
            structure: StructurePhase::Building,
            position: Position::new(None),
        }
    }

    /// Insert a state, marking it accepting if requested. Idempotent.
    pub fn add_state(&mut self, name: S, is_accept: bool) {
        if is_accept {
            self.accept.insert(name.clone());
        }
        self.states.insert(name);
        self.structure = StructurePhase::Building;
    }

    /// Set `transitions[src][symbol] = tgt`, overwriting any prior entry.
    ///
    /// Both states and the symbol are registered. Completion is not
    /// re-run, so the table may be partial afterwards.
    pub fn add_transition(&mut self, src: S, symbol: A, tgt: S) {
        self.states.insert(src.clone());
        self.states.insert(tgt.clone());
        self.alphabet.insert(symbol.clone());
        self.transitions.entry(src).or_default().insert(symbol, tgt);
        self.structure = StructurePhase::Building;
    }

    /// Register a symbol without adding any transition.
    pub fn add_symbol(&mut self, symbol: A) {
        self.alphabet.insert(symbol);
        self.structure = StructurePhase::Building;
    }

    /// Set the start state. The cursor is not moved until the next reset.
    pub fn set_start(&mut self, state: S) {
        self.states.insert(state.clone());
        self.start = Some(state);
        self.structure = StructurePhase::Building;
    }

    pub fn current(&self) -> Option<&S> {
        self.position.current.as_ref()
    }

    pub fn start(&self) -> Option<&S> {
        self.start.as_ref()
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &HashSet<A> {
        &self.alphabet
    }

    pub fn accept(&self) -> &HashSet<S> {
        &self.accept
    }

    /// The full transition function δ.
    pub fn transitions(&self) -> &HashMap<S, HashMap<A, S>> {
        &self.transitions
    }

    /// Look up δ(state, symbol).
    pub fn transition(&self, state: &S, symbol: &A) -> Option<&S> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    /// The dead state, if completion synthesized one.
    pub fn dead_state(&self) -> Option<&S> {
        self.dead.as_ref()
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accept.contains(state)
    }

    pub fn structure_phase(&self) -> StructurePhase {
        self.structure
    }

    /// Symbols with a defined transition out of `state`, sorted.
    pub fn available_symbols(&self, state: &S) -> Vec<&A> {
        let mut symbols: Vec<&A> = self
            .transitions
            .get(state)
            .map(|row| row.keys().collect())
            .unwrap_or_default();
        symbols.sort();
        symbols
    }

    /// The full table as `(state, symbol, target)` rows, sorted by state
    /// then symbol. Undefined entries have no target.
    pub fn table_rows(&self) -> Vec<(&S, &A, Option<&S>)> {
        let mut states: Vec<&S> = self.states.iter().collect();
        states.sort();
        let mut alphabet: Vec<&A> = self.alphabet.iter().collect();
        alphabet.sort();

        states
            .into_iter()
            .flat_map(|state| {
                alphabet
                    .iter()
                    .map(move |symbol| (state, *symbol, self.transition(state, symbol)))
            })
            .collect()
    }
}

impl Dfa<String, char> {
    /// Strings over `{a, b}` that end with `ab`.
    pub fn ends_with_ab() -> Self {
        let mut transitions: HashMap<String, HashMap<char, String>> = HashMap::new();
        for (source, symbol, target) in [
            ("q0", 'a', "q1"),
            ("q0", 'b', "q0"),
            ("q1", 'a', "q1"),
            ("q1", 'b', "q2"),
            ("q2", 'a', "q1"),
            ("q2", 'b', "q0"),
        ] {
            transitions
                .entry(source.to_string())
                .or_default()
                .insert(symbol, target.to_string());
        }

        Self::from_components(
            ["q0", "q1", "q2"].map(String::from),
            ['a', 'b'],
            &transitions,
            Some("q0".to_string()),
            ["q2".to_string()],
        )
    }
}

impl<S: State, A: Symbol> Default for Dfa<S, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: State, A: Symbol> fmt::Display for Dfa<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&S> = self.states.iter().collect();
        states.sort();
        let mut accept: Vec<&S> = self.accept.iter().collect();
        accept.sort();
        write!(
            f,
            "Dfa(start={:?}, states={:?}, accept={:?})",
            self.start, states, accept
        )
    }
}
