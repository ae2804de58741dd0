mod dfa;
pub use dfa::DFA;

mod builder;
pub use builder::DFABuilder;

mod invalid;
pub use invalid::InvalidAutomaton;

/// Comparison of the languages accepted by automata and their states, through
/// breadth-first search in product automata.
mod language;
