//! Simulation of runs over a transition table.

use super::dfa::Dfa;
use crate::core::{
    Acceptance, RunTrace, SimulationPhase, State, Step, Symbol, TraceError, TraceStep,
};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// A simulation position: the live cursor plus its phase.
///
/// Kept apart from the structural definition so the same table can drive
/// the engine's own cursor and any number of borrowed [`super::Cursor`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position<S> {
    pub(crate) current: Option<S>,
    pub(crate) phase: SimulationPhase,
}

impl<S: State> Position<S> {
    pub(crate) fn new(start: Option<&S>) -> Self {
        Self {
            current: start.cloned(),
            phase: SimulationPhase::Reset,
        }
    }

    pub(crate) fn reset(&mut self, start: Option<&S>) {
        self.current = start.cloned();
        self.phase = SimulationPhase::Reset;
    }

    pub(crate) fn step<A: Symbol>(
        &mut self,
        alphabet: &HashSet<A>,
        transitions: &HashMap<S, HashMap<A, S>>,
        symbol: &A,
    ) -> Step<S> {
        if !alphabet.contains(symbol) {
            debug!(symbol = ?symbol, "symbol not in alphabet");
            self.phase = SimulationPhase::Invalid;
            return Step::Invalid;
        }
        let Some(from) = self.current.take() else {
            return Step::Unset;
        };

        let to = transitions
            .get(&from)
            .and_then(|row| row.get(symbol))
            .cloned();
        trace!(from = ?from, symbol = ?symbol, to = ?to, "step");

        self.current = to;
        if self.phase != SimulationPhase::Invalid {
            self.phase = SimulationPhase::Running;
        }
        match &self.current {
            Some(state) => Step::Valid(state.clone()),
            None => Step::Unset,
        }
    }

    pub(crate) fn run<A, I>(
        &mut self,
        start: Option<&S>,
        alphabet: &HashSet<A>,
        transitions: &HashMap<S, HashMap<A, S>>,
        sequence: I,
    ) -> Step<S>
    where
        A: Symbol,
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.reset(start);
        for symbol in sequence {
            if let Step::Invalid = self.step(alphabet, transitions, symbol.borrow()) {
                return Step::Invalid;
            }
        }
        match &self.current {
            Some(state) => Step::Valid(state.clone()),
            None => Step::Unset,
        }
    }

    pub(crate) fn trace<A, I>(
        &mut self,
        start: Option<&S>,
        alphabet: &HashSet<A>,
        transitions: &HashMap<S, HashMap<A, S>>,
        sequence: I,
    ) -> Result<RunTrace<S, A>, TraceError<S, A>>
    where
        A: Symbol,
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.reset(start);
        let mut run = RunTrace::new(start.cloned());
        for (position, symbol) in sequence.into_iter().enumerate() {
            let symbol = symbol.borrow();
            let from = self.current.clone();
            match self.step(alphabet, transitions, symbol) {
                Step::Invalid => {
                    return Err(TraceError::InvalidSymbol {
                        position,
                        symbol: symbol.clone(),
                        partial: Box::new(run),
                    });
                }
                outcome => {
                    // An unset cursor consumes nothing and records nothing.
                    if let Some(from) = from {
                        run = run.record(TraceStep {
                            from,
                            symbol: symbol.clone(),
                            to: outcome.into_state(),
                        });
                    }
                }
            }
        }
        Ok(run)
    }
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Put the cursor back on the start state.
    ///
    /// Always succeeds; with no start state the cursor becomes unset.
    pub fn reset(&mut self) {
        self.position.reset(self.start.as_ref());
    }

    /// Consume exactly one symbol.
    ///
    /// Returns [`Step::Invalid`] and leaves the cursor alone when the
    /// symbol is outside the alphabet, [`Step::Unset`] when there is no
    /// cursor or the table has no entry, and the reached state otherwise.
    /// Once invalid, the phase stays [`SimulationPhase::Invalid`] until the
    /// next `reset` or `run`, even though valid steps still move the cursor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::automaton::Dfa;
    /// use dfa_engine::core::Step;
    ///
    /// let mut dfa: Dfa<String, char> = Dfa::empty();
    /// dfa.add_transition("q0".to_string(), 'a', "q1".to_string());
    /// dfa.set_start("q0".to_string());
    /// dfa.reset();
    ///
    /// assert_eq!(dfa.step(&'a'), Step::Valid("q1".to_string()));
    /// assert_eq!(dfa.step(&'z'), Step::Invalid);
    /// ```
    pub fn step(&mut self, symbol: &A) -> Step<S> {
        self.position.step(&self.alphabet, &self.transitions, symbol)
    }

    /// Reset, then consume the whole sequence.
    ///
    /// The first symbol outside the alphabet aborts the run with
    /// [`Step::Invalid`], leaving the cursor where it was at that point.
    pub fn run<I>(&mut self, sequence: I) -> Step<S>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.position.run(
            self.start.as_ref(),
            &self.alphabet,
            &self.transitions,
            sequence,
        )
    }

    /// Run the sequence and report whether it ends in an accept state.
    ///
    /// A run that ends without a current state (no start state, or a
    /// missing table entry) is [`Acceptance::InvalidInput`], not a rejection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::automaton::Dfa;
    /// use dfa_engine::core::Acceptance;
    ///
    /// let mut dfa = Dfa::ends_with_ab();
    /// assert_eq!(dfa.accepts("aab".chars()), Acceptance::Accepted);
    /// assert_eq!(dfa.accepts("aba".chars()), Acceptance::Rejected);
    /// assert_eq!(dfa.accepts("ac".chars()), Acceptance::InvalidInput);
    /// ```
    pub fn accepts<I>(&mut self, sequence: I) -> Acceptance
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let outcome = self.run(sequence);
        self.acceptance_of(&outcome)
    }

    /// Run the sequence while recording every step.
    pub fn trace<I>(&mut self, sequence: I) -> Result<RunTrace<S, A>, TraceError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.position.trace(
            self.start.as_ref(),
            &self.alphabet,
            &self.transitions,
            sequence,
        )
    }

    /// The current simulation phase.
    pub fn simulation_phase(&self) -> SimulationPhase {
        self.position.phase
    }

    pub(crate) fn acceptance_of(&self, outcome: &Step<S>) -> Acceptance {
        match outcome {
            Step::Invalid | Step::Unset => Acceptance::InvalidInput,
            Step::Valid(state) if self.accept.contains(state) => Acceptance::Accepted,
            Step::Valid(_) => Acceptance::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StructurePhase;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn ends_with_ab_acceptance() {
        let mut dfa = Dfa::ends_with_ab();

        assert_eq!(dfa.accepts("ab".chars()), Acceptance::Accepted);
        assert_eq!(dfa.accepts("aab".chars()), Acceptance::Accepted);
        assert_eq!(dfa.accepts("aba".chars()), Acceptance::Rejected);
        assert_eq!(dfa.accepts("b".chars()), Acceptance::Rejected);
        assert_eq!(dfa.accepts("".chars()), Acceptance::Rejected);
        assert_eq!(dfa.accepts("ac".chars()), Acceptance::InvalidInput);
    }

    #[test]
    fn step_advances_cursor() {
        let mut dfa = Dfa::ends_with_ab();

        assert_eq!(dfa.current(), Some(&s("q0")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Reset);
        assert_eq!(dfa.step(&'a'), Step::Valid(s("q1")));
        assert_eq!(dfa.step(&'b'), Step::Valid(s("q2")));
        assert_eq!(dfa.current(), Some(&s("q2")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Running);
    }

    #[test]
    fn invalid_step_leaves_cursor_in_place() {
        let mut dfa = Dfa::ends_with_ab();
        dfa.step(&'a');

        assert_eq!(dfa.step(&'x'), Step::Invalid);
        assert_eq!(dfa.current(), Some(&s("q1")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Invalid);

        dfa.reset();
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Reset);
        assert_eq!(dfa.current(), Some(&s("q0")));
    }

    #[test]
    fn run_aborts_at_first_invalid_symbol() {
        let mut dfa = Dfa::ends_with_ab();

        assert_eq!(dfa.run("aaxb".chars()), Step::Invalid);
        assert_eq!(dfa.current(), Some(&s("q1")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Invalid);
    }

    #[test]
    fn run_accepts_borrowed_symbols() {
        let mut dfa = Dfa::ends_with_ab();
        let input = vec!['a', 'b'];

        assert_eq!(dfa.run(&input), Step::Valid(s("q2")));
        assert_eq!(dfa.run(input), Step::Valid(s("q2")));
    }

    #[test]
    fn missing_start_never_leaves_unset() {
        let mut dfa: Dfa<String, char> = Dfa::empty();
        dfa.add_transition(s("q0"), 'a', s("q0"));

        assert_eq!(dfa.current(), None);
        assert_eq!(dfa.step(&'a'), Step::Unset);
        assert_eq!(dfa.run("aa".chars()), Step::Unset);
        assert_eq!(dfa.accepts("aa".chars()), Acceptance::InvalidInput);
        assert_eq!(dfa.accepts("ab".chars()), Acceptance::InvalidInput);
        assert_eq!(dfa.accepts("".chars()), Acceptance::InvalidInput);
    }

    #[test]
    fn missing_entry_unsets_cursor() {
        let mut dfa: Dfa<String, char> = Dfa::empty();
        dfa.add_transition(s("q0"), 'a', s("q1"));
        dfa.add_transition(s("q1"), 'b', s("q0"));
        dfa.set_start(s("q0"));
        dfa.reset();

        assert_eq!(dfa.structure_phase(), StructurePhase::Building);
        assert_eq!(dfa.step(&'b'), Step::Unset);
        assert_eq!(dfa.current(), None);
        assert_eq!(dfa.step(&'a'), Step::Unset);

        assert_eq!(dfa.run("b".chars()), Step::Unset);
        assert_eq!(dfa.accepts("b".chars()), Acceptance::InvalidInput);
        assert_eq!(dfa.accepts("ab".chars()), Acceptance::Rejected);
    }

    #[test]
    fn valid_step_after_invalid_keeps_invalid_phase() {
        let mut dfa = Dfa::ends_with_ab();

        assert_eq!(dfa.step(&'z'), Step::Invalid);
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Invalid);

        assert_eq!(dfa.step(&'a'), Step::Valid(s("q1")));
        assert_eq!(dfa.current(), Some(&s("q1")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Invalid);

        assert_eq!(dfa.run("a".chars()), Step::Valid(s("q1")));
        assert_eq!(dfa.simulation_phase(), SimulationPhase::Running);
    }

    #[test]
    fn trace_records_each_step() {
        let mut dfa = Dfa::ends_with_ab();
        let trace = dfa.trace("aab".chars()).unwrap();

        assert_eq!(trace.steps().len(), 3);
        assert_eq!(
            trace.path(),
            vec![&s("q0"), &s("q1"), &s("q1"), &s("q2")]
        );
        assert_eq!(trace.outcome(), Step::Valid(s("q2")));
        assert_eq!(dfa.current(), Some(&s("q2")));
    }

    #[test]
    fn trace_reports_invalid_symbol_with_partial_trace() {
        let mut dfa = Dfa::ends_with_ab();

        match dfa.trace("abc".chars()) {
            Err(TraceError::InvalidSymbol {
                position,
                symbol,
                partial,
            }) => {
                assert_eq!(position, 2);
                assert_eq!(symbol, 'c');
                assert_eq!(partial.steps().len(), 2);
            }
            other => panic!("Expected InvalidSymbol, got {:?}", other),
        }
    }
}
