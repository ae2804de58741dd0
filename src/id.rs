use std::{fmt::Debug, hash::Hash};

use crate::Show;

/// Identifies a state of a [`crate::DFA`]. Identifiers are opaque to the algorithms in this
/// crate, they only need to be comparable, hashable and printable.
///
/// Minimization replaces every state by a merged state, which needs a fresh identifier.
/// [`StateId::for_class`] produces the identifier of the merged state with the given
/// class index. For integers this is the index itself, for strings it is `q{index}`.
pub trait StateId: Clone + Eq + Ord + Hash + Debug + Show {
    /// Returns the identifier for the merged state with class index `index`.
    fn for_class(index: usize) -> Self;
}

macro_rules! impl_integer_state_id {
    ($($t:ty),*) => {
        $(
            impl StateId for $t {
                fn for_class(index: usize) -> Self {
                    index as $t
                }
            }
        )*
    }
}

impl_integer_state_id!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl StateId for String {
    fn for_class(index: usize) -> Self {
        format!("q{index}")
    }
}
