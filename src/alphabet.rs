use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::Show;

/// A symbol of an alphabet, which is also the type of the symbols in a word. Transitions
/// of a [`crate::DFA`] are labelled with symbols.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Show {}
impl<S: Clone + Eq + Ord + Hash + Debug + Show> Symbol for S {}

/// A finite collection of [`Symbol`]s. The symbols are kept sorted and free of duplicates,
/// which fixes the order in which [`Alphabet::universe`] yields them. Every algorithm that
/// needs to go through the alphabet does so in this order, making the results reproducible.
///
/// # Example
/// ```
/// use automata_minimize::prelude::*;
///
/// let alphabet: Alphabet<char> = ['b', 'a', 'b'].into_iter().collect();
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet.universe().collect::<Vec<_>>(), vec![&'a', &'b']);
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct Alphabet<S: Symbol = char>(Vec<S>);

impl Alphabet<char> {
    /// Creates a new [`Alphabet`] of the given size. The symbols are just the first `size` letters
    /// of the latin alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }
}

impl<S: Symbol> Default for Alphabet<S> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().sorted().dedup().collect())
    }
}

impl<S: Symbol> Alphabet<S> {
    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all symbols in ascending order.
    pub fn universe(&self) -> std::slice::Iter<'_, S> {
        self.0.iter()
    }

    /// Checks whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: &S) -> bool {
        self.0.binary_search(symbol).is_ok()
    }

    /// Returns the position of `symbol` in the iteration order, if it exists.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.0.binary_search(symbol).ok()
    }
}

impl<S: Symbol> Show for Alphabet<S> {
    fn show(&self) -> String {
        format!("{{{}}}", self.0.iter().map(Show::show).join(", "))
    }
}
