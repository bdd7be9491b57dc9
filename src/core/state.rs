//! Identifier traits for automaton states and input symbols.
//!
//! States and symbols are opaque values compared by equality. The engine
//! only needs to hash them, order them for canonical snapshots, and
//! serialize them for checkpoints.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// A state carries no attributes beyond its identity. The one thing the
/// engine cannot invent on its own is the identifier of the absorbing dead
/// state it synthesizes during totality completion, so implementors name it
/// through [`State::dead`]. When that identifier is already a user state,
/// completion moves on through [`State::dead_candidates`] and takes the
/// first unused one.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states are stored in sets and as map keys
/// - `Ord`: snapshots list states in sorted order
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
/// - `'static`: dead-state candidates are handed out as boxed iterators
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl State for Door {
///     fn dead() -> Self {
///         Self::Jammed
///     }
/// }
///
/// assert_eq!(Door::dead(), Door::Jammed);
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Ord + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Preferred identifier for the synthesized dead state.
    fn dead() -> Self;

    /// Identifiers completion may use for the dead state, in order of
    /// preference. Starts with [`State::dead`].
    ///
    /// The default yields only [`State::dead`], so an automaton that already
    /// uses that value cannot be completed.
    fn dead_candidates() -> Box<dyn Iterator<Item = Self>> {
        Box::new(std::iter::once(Self::dead()))
    }

    /// Get the state's name for display/logging.
    ///
    /// Default implementation uses the `Debug` form.
    fn name(&self) -> String {
        format!("{:?}", self)
    }
}

/// Trait for input symbols.
///
/// Blanket-implemented for every type with the required bounds, so `char`,
/// `String`, integers and plain derived enums are all symbols.
pub trait Symbol:
    Clone + Eq + Hash + Ord + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Hash + Ord + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Name of the dead state for string-identified automata.
pub const DEAD_STATE_NAME: &str = "__DEAD__";

impl State for String {
    fn dead() -> Self {
        DEAD_STATE_NAME.to_string()
    }

    /// `__DEAD__`, then `__DEAD__1`, `__DEAD__2`, ...
    fn dead_candidates() -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            std::iter::once(Self::dead())
                .chain((1u64..).map(|n| format!("{}{}", DEAD_STATE_NAME, n))),
        )
    }

    fn name(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_state_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl State for $ty {
                fn dead() -> Self {
                    <$ty>::MAX
                }

                /// Counts down from `MAX`.
                fn dead_candidates() -> Box<dyn Iterator<Item = Self>> {
                    Box::new((0..=<$ty>::MAX).rev())
                }

                fn name(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_state_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Sink,
    }

    impl State for TestState {
        fn dead() -> Self {
            Self::Sink
        }
    }

    #[test]
    fn string_dead_state_is_reserved_name() {
        assert_eq!(String::dead(), "__DEAD__");
        assert_eq!("q0".to_string().name(), "q0");
    }

    #[test]
    fn unsigned_dead_state_is_max() {
        assert_eq!(u32::dead(), u32::MAX);
        assert_eq!(usize::dead(), usize::MAX);
        assert_eq!(7u8.name(), "7");
    }

    #[test]
    fn dead_candidates_start_with_dead() {
        let strings: Vec<String> = String::dead_candidates().take(3).collect();
        assert_eq!(strings, vec!["__DEAD__", "__DEAD__1", "__DEAD__2"]);

        let bytes: Vec<u8> = u8::dead_candidates().take(2).collect();
        assert_eq!(bytes, vec![255, 254]);
        assert_eq!(u8::dead_candidates().count(), 256);

        let enums: Vec<TestState> = TestState::dead_candidates().collect();
        assert_eq!(enums, vec![TestState::Sink]);
    }

    #[test]
    fn enum_name_defaults_to_debug() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
        assert_eq!(TestState::dead(), TestState::Sink);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    fn assert_symbol<A: Symbol>(_: &A) {}

    #[test]
    fn common_types_are_symbols() {
        assert_symbol(&'a');
        assert_symbol(&"arm_home".to_string());
        assert_symbol(&3u32);
    }
}
