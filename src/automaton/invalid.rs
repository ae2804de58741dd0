use thiserror::Error;

/// Reasons for which a description of a [`crate::DFA`] is rejected. States and symbols are
/// rendered with [`crate::Show`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAutomaton {
    #[error("initial state `{0}` is not a state of the automaton")]
    UnknownInitialState(String),
    #[error("accepting state `{0}` is not a state of the automaton")]
    UnknownAcceptingState(String),
    #[error("transition from `{0}` on `{1}` leads to `{2}`, which is not a state of the automaton")]
    UnknownTarget(String, String, String),
    #[error("transition from `{0}` uses symbol `{1}`, which is not part of the alphabet")]
    UnknownSymbol(String, String),
    #[error("state `{0}` has more than one transition on `{1}`")]
    NondeterministicTransition(String, String),
}
