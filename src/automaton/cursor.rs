//! Independent simulation cursors over a shared definition.

use super::dfa::Dfa;
use super::simulate::Position;
use crate::core::{Acceptance, RunTrace, SimulationPhase, State, Step, Symbol, TraceError};
use std::borrow::Borrow;

/// A simulation cursor that borrows an automaton read-only.
///
/// Any number of cursors may run over the same definition, including from
/// different threads, without touching the automaton's own cursor.
///
/// # Example
///
/// ```rust
/// use dfa_engine::automaton::Dfa;
/// use dfa_engine::core::{Acceptance, Step};
///
/// let dfa = Dfa::ends_with_ab();
/// let mut left = dfa.cursor();
/// let mut right = dfa.cursor();
///
/// left.step(&'a');
/// assert_eq!(left.step(&'b'), Step::Valid("q2".to_string()));
/// assert_eq!(right.current(), Some(&"q0".to_string()));
/// assert_eq!(right.accepts("ab".chars()), Acceptance::Accepted);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a, S: State, A: Symbol> {
    dfa: &'a Dfa<S, A>,
    position: Position<S>,
}

impl<'a, S: State, A: Symbol> Cursor<'a, S, A> {
    pub(crate) fn new(dfa: &'a Dfa<S, A>) -> Self {
        Self {
            dfa,
            position: Position::new(dfa.start.as_ref()),
        }
    }

    pub fn reset(&mut self) {
        self.position.reset(self.dfa.start.as_ref());
    }

    pub fn step(&mut self, symbol: &A) -> Step<S> {
        self.position
            .step(&self.dfa.alphabet, &self.dfa.transitions, symbol)
    }

    pub fn run<I>(&mut self, sequence: I) -> Step<S>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.position.run(
            self.dfa.start.as_ref(),
            &self.dfa.alphabet,
            &self.dfa.transitions,
            sequence,
        )
    }

    pub fn accepts<I>(&mut self, sequence: I) -> Acceptance
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let outcome = self.run(sequence);
        self.dfa.acceptance_of(&outcome)
    }

    pub fn trace<I>(&mut self, sequence: I) -> Result<RunTrace<S, A>, TraceError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.position.trace(
            self.dfa.start.as_ref(),
            &self.dfa.alphabet,
            &self.dfa.transitions,
            sequence,
        )
    }

    pub fn current(&self) -> Option<&S> {
        self.position.current.as_ref()
    }

    pub fn phase(&self) -> SimulationPhase {
        self.position.phase
    }

    /// The automaton this cursor runs over.
    pub fn automaton(&self) -> &'a Dfa<S, A> {
        self.dfa
    }
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// A fresh cursor on the start state.
    pub fn cursor(&self) -> Cursor<'_, S, A> {
        Cursor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn cursor_does_not_move_engine_cursor() {
        let mut dfa = Dfa::ends_with_ab();
        dfa.step(&'a');

        let mut cursor = dfa.cursor();
        assert_eq!(cursor.run("aab".chars()), Step::Valid("q2".to_string()));
        assert_eq!(dfa.current(), Some(&"q1".to_string()));
    }

    #[test]
    fn cursor_phases_follow_simulation() {
        let dfa = Dfa::ends_with_ab();
        let mut cursor = dfa.cursor();
        assert_eq!(cursor.phase(), SimulationPhase::Reset);

        cursor.step(&'b');
        assert_eq!(cursor.phase(), SimulationPhase::Running);

        assert_eq!(cursor.step(&'z'), Step::Invalid);
        assert_eq!(cursor.phase(), SimulationPhase::Invalid);

        assert_eq!(cursor.step(&'a'), Step::Valid("q1".to_string()));
        assert_eq!(cursor.phase(), SimulationPhase::Invalid);

        cursor.reset();
        assert_eq!(cursor.phase(), SimulationPhase::Reset);
    }

    #[test]
    fn cursors_run_concurrently_over_shared_definition() {
        let dfa = Dfa::ends_with_ab();
        let inputs = ["ab", "aab", "aba", "b"];

        let results: Vec<Acceptance> = thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let dfa = &dfa;
                    scope.spawn(move || dfa.cursor().accepts(input.chars()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(
            results,
            vec![
                Acceptance::Accepted,
                Acceptance::Accepted,
                Acceptance::Rejected,
                Acceptance::Rejected
            ]
        );
    }

    #[test]
    fn cursor_trace_matches_engine_trace() {
        let mut dfa = Dfa::ends_with_ab();
        let from_cursor = dfa.cursor().trace("abab".chars()).unwrap();
        let from_engine = dfa.trace("abab".chars()).unwrap();
        assert_eq!(from_cursor, from_engine);
    }
}
