//! Totality completion.
//!
//! Completion runs in two phases. A read-only scan decides whether any
//! (state, symbol) entry is missing; only then is the dead state added and
//! a fresh snapshot of the state set walked to fill the gaps, so the dead
//! state's own row is filled too.
//!
//! The dead state never reuses an identifier the definition already
//! mentions, unless it is the dead state a previous completion added and it
//! is still rejecting and absorbing.

use super::dfa::Dfa;
use crate::core::{State, StructurePhase, Symbol};
use tracing::{debug, warn};

/// Outcome of [`Dfa::make_total`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion<S> {
    /// Nothing was missing (or the alphabet is empty); the table is unchanged.
    AlreadyTotal,

    /// A dead state was added and `filled` entries were routed to it.
    /// The dead state's own self-loops are not counted.
    Completed { dead: S, filled: usize },

    /// Every identifier from [`State::dead_candidates`] is already in use.
    /// The table is left partial with `missing` undefined entries.
    Unavailable { missing: usize },
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Make δ total over `states × alphabet`.
    ///
    /// Every state gets a (possibly empty) row. If some entry is missing,
    /// one absorbing dead state named by [`State::dead`] is added and every
    /// missing entry points at it. An already total table is left as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::automaton::{Completion, Dfa};
    ///
    /// let mut dfa: Dfa<String, char> = Dfa::empty();
    /// dfa.add_transition("q0".to_string(), 'a', "q1".to_string());
    /// dfa.add_state("q1".to_string(), true);
    /// dfa.add_symbol('b');
    ///
    /// let completion = dfa.make_total();
    /// assert_eq!(
    ///     completion,
    ///     Completion::Completed { dead: "__DEAD__".to_string(), filled: 3 }
    /// );
    /// assert!(dfa.is_total());
    /// ```
    pub fn make_total(&mut self) -> Completion<S> {
        for state in &self.states {
            self.transitions.entry(state.clone()).or_default();
        }

        if self.alphabet.is_empty() || self.is_total() {
            self.structure = StructurePhase::Completed;
            return Completion::AlreadyTotal;
        }

        let Some(dead) = self.free_dead_state() else {
            let missing = self.missing_transitions().len();
            warn!(missing, "no unused identifier left for a dead state");
            self.structure = StructurePhase::Building;
            return Completion::Unavailable { missing };
        };

        self.states.insert(dead.clone());
        let dead_row = self.transitions.entry(dead.clone()).or_default();
        for symbol in &self.alphabet {
            dead_row
                .entry(symbol.clone())
                .or_insert_with(|| dead.clone());
        }

        let snapshot: Vec<S> = self.states.iter().cloned().collect();
        let mut filled = 0;
        for state in snapshot {
            if state == dead {
                continue;
            }
            let row = self.transitions.entry(state).or_default();
            for symbol in &self.alphabet {
                if !row.contains_key(symbol) {
                    row.insert(symbol.clone(), dead.clone());
                    filled += 1;
                }
            }
        }

        debug!(dead = ?dead, filled, "synthesized dead state");
        self.dead = Some(dead.clone());
        self.structure = StructurePhase::Completed;
        Completion::Completed { dead, filled }
    }

    /// The previous dead state if it still rejects and absorbs, otherwise
    /// the first candidate the definition does not mention.
    fn free_dead_state(&self) -> Option<S> {
        if let Some(dead) = &self.dead {
            let absorbing = self
                .transitions
                .get(dead)
                .map_or(true, |row| row.values().all(|target| target == dead));
            if absorbing && !self.accept.contains(dead) && self.start.as_ref() != Some(dead) {
                return Some(dead.clone());
            }
        }
        S::dead_candidates().find(|candidate| !self.mentions(candidate))
    }

    fn mentions(&self, state: &S) -> bool {
        self.states.contains(state)
            || self.accept.contains(state)
            || self.start.as_ref() == Some(state)
            || self.transitions.contains_key(state)
            || self
                .transitions
                .values()
                .any(|row| row.values().any(|target| target == state))
    }

    /// Whether δ is defined for every state and symbol.
    ///
    /// Vacuously true for an empty alphabet.
    pub fn is_total(&self) -> bool {
        self.states.iter().all(|state| {
            self.alphabet.iter().all(|symbol| {
                self.transitions
                    .get(state)
                    .is_some_and(|row| row.contains_key(symbol))
            })
        })
    }

    /// Every undefined `(state, symbol)` pair, sorted.
    pub fn missing_transitions(&self) -> Vec<(&S, &A)> {
        let mut missing: Vec<(&S, &A)> = self
            .states
            .iter()
            .flat_map(|state| {
                self.alphabet
                    .iter()
                    .filter(move |symbol| self.transition(state, symbol).is_none())
                    .map(move |symbol| (state, symbol))
            })
            .collect();
        missing.sort();
        missing
    }
}
