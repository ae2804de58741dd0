//! Library for reducing deterministic finite automata (DFA) to their canonical minimal form.
//!
//! A [`DFA`] consists of a finite set of states, an [`Alphabet`] of symbols, a possibly partial
//! transition function, a designated initial state and a set of accepting states. State
//! identifiers are opaque, anything implementing [`StateId`] can be used (all integer types and
//! `String` do). Automata are usually created through the [`DFABuilder`], or from their five
//! constituents with [`DFA::from_parts`]. Both check that the parts fit together and report an
//! [`InvalidAutomaton`] otherwise.
//!
//! Minimization happens in two phases, which can be applied separately or in sequence:
//! - [`DFA::prune_unreachable`] removes all states that cannot be reached from the initial
//!   state, using a breadth-first search (see [`reachable::MinimalRepresentatives`]).
//! - `DFA::minimize` merges states that accept the same words, using Moore's partition
//!   refinement. The merged states remember which states they stand for in
//!   [`DFA::state_mapping`].
//!
//! `DFA::minimized` does both. Each operation also exists as an in-place variant, for example
//! `DFA::minimize_in_place`.
//!
//! A missing transition means that the automaton gets stuck and rejects. Such transitions are
//! never completed, so a state that cannot read some symbol is always distinguished from a
//! state that can, even if it can only move into a state from which nothing is accepted.
//!
//! Minimization is available with the `minimize` feature, the `random` feature adds
//! `random::generate_random_dfa`. Both are enabled by default.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use automata_minimize::prelude::*;` should be enough to use the package.
pub mod prelude {
    #[cfg(feature = "random")]
    pub use super::random::generate_random_dfa;
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{DFABuilder, InvalidAutomaton, DFA},
        id::StateId,
        math,
        math::{Bijection, Map, OrderedMap, OrderedSet, Partition, Set},
        reachable::{MinimalRepresentative, MinimalRepresentatives, ReachableStates},
        Show,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

mod id;
pub use id::StateId;

mod show;
pub use show::Show;

/// Defines deterministic finite automata, how to build them and how to compare the languages
/// they accept.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;
pub use automaton::{DFABuilder, InvalidAutomaton, DFA};

/// Breadth-first exploration of the reachable part of an automaton and removal of the states
/// outside of it.
pub mod reachable;

/// Contains the implementation of Moore's partition refinement for merging equivalent states.
/// This is feature gated behind the `minimize` feature.
#[cfg(feature = "minimize")]
pub mod minimization;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;
