use std::collections::VecDeque;

use itertools::Itertools;

use crate::prelude::*;

/// A state of the product of two automata. `None` stands for the implicit rejecting sink
/// that a run enters once it hits a missing transition.
type ProductState<'a, Q, P> = (Option<&'a Q>, Option<&'a P>);

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Searches for a length-lexicographically minimal word on which the runs of `self` from
    /// `left` and of `other` from `right` disagree, one ending in an accepting state and the
    /// other one not (or getting stuck). Symbols that only one of the two automata knows
    /// lead the other one into the rejecting sink.
    fn distinguish<'a, P: StateId>(
        &'a self,
        left: &'a Q,
        other: &'a DFA<P, S>,
        right: &'a P,
    ) -> Option<Vec<S>> {
        let symbols = self
            .alphabet()
            .universe()
            .merge(other.alphabet().universe())
            .dedup()
            .collect_vec();

        let origin: ProductState<'a, Q, P> = (Some(left), Some(right));
        let mut seen = Set::from_iter([origin]);
        let mut queue = VecDeque::from([(vec![], origin)]);

        while let Some((access, (l, r))) = queue.pop_front() {
            let l_accepts = l.is_some_and(|q| self.is_accepting(q));
            let r_accepts = r.is_some_and(|p| other.is_accepting(p));
            if l_accepts != r_accepts {
                return Some(access);
            }

            for &sym in &symbols {
                let next = (
                    l.and_then(|q| self.successor(q, sym)),
                    r.and_then(|p| other.successor(p, sym)),
                );
                // both runs are stuck, nothing can be distinguished from here
                if next == (None, None) {
                    continue;
                }
                if seen.insert(next) {
                    let mut extended = access.clone();
                    extended.push(sym.clone());
                    queue.push_back((extended, next));
                }
            }
        }
        None
    }

    /// Computes a length-lexicographically minimal word that is accepted by exactly one of
    /// `self` and `other`, or `None` if the two automata accept the same language.
    pub fn distinguishing_word<P: StateId>(&self, other: &DFA<P, S>) -> Option<Vec<S>> {
        self.distinguish(self.initial(), other, other.initial())
    }

    /// Checks whether `self` is equivalent to `other`, i.e. whether the two DFAs accept
    /// the same language. The state identifiers of the two automata are unrelated.
    pub fn equivalent<P: StateId>(&self, other: &DFA<P, S>) -> bool {
        self.distinguishing_word(other).is_none()
    }

    /// Attempts to separate the state `left` from the state `right` by finding a word that
    /// is accepted from one of them but not from the other, i.e. a word in the symmetric
    /// difference of the languages accepted from the two states.
    pub fn separate(&self, left: &Q, right: &Q) -> Option<Vec<S>> {
        if left == right {
            return None;
        }
        self.distinguish(left, self, right)
    }

    /// Tries to construct a (finite) word witnessing that the accepted language is not empty.
    /// If such a word exists, the function returns the length-lexicographically minimal one,
    /// otherwise `None`.
    pub fn give_word(&self) -> Option<Vec<S>> {
        self.minimal_representatives()
            .find_map(|(mr, q)| self.is_accepting(q).then_some(mr))
    }

    /// Returns true if and only if the accepted language is empty.
    pub fn is_empty_language(&self) -> bool {
        self.give_word().is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// Accepts all words over `{a, b}` that contain an `a`. The accepting states 1 and 2
    /// are equivalent.
    fn contains_a() -> DFA {
        DFA::builder()
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 2),
                (1, 'b', 2),
                (2, 'a', 1),
                (2, 'b', 1),
            ])
            .with_accepting([1, 2])
            .into_dfa(0)
            .unwrap()
    }

    #[test]
    fn equivalence_of_automata() {
        let small: DFA<String, char> = DFA::builder()
            .with_transitions([
                ("x".to_string(), 'a', "y".to_string()),
                ("x".to_string(), 'b', "x".to_string()),
                ("y".to_string(), 'a', "y".to_string()),
                ("y".to_string(), 'b', "y".to_string()),
            ])
            .with_accepting(["y".to_string()])
            .into_dfa("x".to_string())
            .unwrap();

        assert!(contains_a().equivalent(&small));
        assert!(small.equivalent(&contains_a()));

        let only_b = DFA::builder()
            .with_transitions([(0u32, 'b', 0)])
            .into_dfa(0)
            .unwrap();
        assert!(only_b.is_empty_language());
        assert_eq!(
            contains_a().distinguishing_word(&only_b),
            Some(vec!['a'])
        );
    }

    #[test]
    fn partial_transitions_reject() {
        // 1 has no transition on 'b', so "ab" is rejected in `partial` but not in `total`
        let partial = DFA::builder()
            .with_transitions([(0u32, 'a', 1), (1, 'a', 1)])
            .with_alphabet_symbols(['b'])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        let total = DFA::builder()
            .with_transitions([(0u32, 'a', 1), (1, 'a', 1), (1, 'b', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        assert_eq!(partial.distinguishing_word(&total), Some(vec!['a', 'b']));
    }

    #[test]
    fn separating_states() {
        let dfa = contains_a();
        assert_eq!(dfa.separate(&1, &2), None);
        assert_eq!(dfa.separate(&0, &1), Some(vec![]));
        assert_eq!(dfa.separate(&0, &0), None);
        assert_eq!(dfa.give_word(), Some(vec!['a']));
    }
}
