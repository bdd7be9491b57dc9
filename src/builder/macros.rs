//! Macros for ergonomic automaton construction.

/// Generate a state enum with the `State` trait implemented.
///
/// The `dead:` variant names the state used when completion has to
/// synthesize a dead state. It must stay out of the transitions: an enum has
/// no spare identifiers, so completion reports
/// [`Completion::Unavailable`](crate::automaton::Completion::Unavailable)
/// when the variant is already in use. The optional `accept:` list generates an
/// `accepting()` constructor for feeding the builder.
///
/// # Example
///
/// ```
/// use dfa_engine::builder::DfaBuilder;
/// use dfa_engine::core::State;
/// use dfa_engine::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Broken,
///     }
///     dead: Broken
///     accept: [Unlocked]
/// }
///
/// assert_eq!(Turnstile::dead(), Turnstile::Broken);
/// assert_eq!(Turnstile::Locked.name(), "Locked");
///
/// let dfa = DfaBuilder::<Turnstile, char>::new()
///     .start(Turnstile::Locked)
///     .accepting(Turnstile::accepting())
///     .transition(Turnstile::Locked, 'c', Turnstile::Unlocked)
///     .build()
///     .unwrap();
/// assert_eq!(dfa.dead_state(), Some(&Turnstile::Broken));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        dead: $dead:ident
        $(accept: [$($accept:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn dead() -> Self {
                Self::$dead
            }

            fn name(&self) -> String {
                match self {
                    $(Self::$variant => stringify!($variant).to_string()),*
                }
            }
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub fn all() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }

            /// The variants listed as accepting.
            #[allow(dead_code)]
            pub fn accepting() -> Vec<Self> {
                vec![$($(Self::$accept),*)?]
            }
        }
    };
}
