use itertools::Itertools;

use crate::prelude::*;

/// Helper struct for the construction of a [`DFA`]. It stores a list of transitions, a list of
/// accepting states and optionally additional states and symbols.
///
/// The states of the resulting automaton are those that appear on some transition, those that
/// are added explicitly through [`DFABuilder::with_states`] and the initial state. Its alphabet
/// consists of all symbols that appear on a transition together with those that are added
/// through [`DFABuilder::with_alphabet_symbols`]. Accepting states are not added implicitly, an
/// accepting state that is not a state otherwise makes [`DFABuilder::into_dfa`] fail.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']`, where 1 is
/// the only accepting state and 0 is initial. Reading `b` leads to 1, reading `a` leads back to 0.
/// ```
/// use automata_minimize::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_transitions([(0u32, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
///     .with_accepting([1])
///     .into_dfa(0)
///     .unwrap();
/// assert!(dfa.accepts("aab".chars()));
/// ```
#[derive(Clone, Debug)]
pub struct DFABuilder<Q = u32, S = char> {
    states: Vec<Q>,
    symbols: Vec<S>,
    edges: Vec<(Q, S, Q)>,
    accepting: Vec<Q>,
}

impl<Q, S> Default for DFABuilder<Q, S> {
    fn default() -> Self {
        Self {
            states: vec![],
            symbols: vec![],
            edges: vec![],
            accepting: vec![],
        }
    }
}

impl<Q: StateId, S: Symbol> DFABuilder<Q, S> {
    /// Adds states to the automaton, which is only necessary for states that do not appear
    /// on any transition.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, iter: I) -> Self {
        self.states.extend(iter);
        self
    }

    /// By default, the only alphabet symbols in the automaton that is built are the ones that
    /// appear on at least one transition. This method can be used to force additional alphabet
    /// symbols to appear.
    pub fn with_alphabet_symbols<I: IntoIterator<Item = S>>(mut self, iter: I) -> Self {
        self.symbols.extend(iter);
        self
    }

    /// Adds a list of transitions, given as triples of source, symbol and target.
    pub fn with_transitions<I: IntoIterator<Item = (Q, S, Q)>>(mut self, iter: I) -> Self {
        self.edges.extend(iter);
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, iter: I) -> Self {
        self.accepting.extend(iter);
        self
    }

    /// Builds the [`DFA`] with the given `initial` state. Fails if some state has two
    /// transitions on the same symbol that lead to different targets, or if the collected
    /// parts do not form a valid automaton (see [`DFA::from_parts`]).
    pub fn into_dfa(self, initial: Q) -> Result<DFA<Q, S>, InvalidAutomaton> {
        let alphabet: Alphabet<S> = self
            .edges
            .iter()
            .map(|(_, a, _)| a.clone())
            .chain(self.symbols)
            .collect();

        let states: OrderedSet<Q> = self
            .edges
            .iter()
            .flat_map(|(q, _, p)| [q.clone(), p.clone()])
            .chain(self.states)
            .chain(std::iter::once(initial.clone()))
            .collect();

        let mut transitions: OrderedMap<Q, OrderedMap<S, Q>> = OrderedMap::new();
        for (q, a, p) in self.edges.into_iter().unique() {
            let edges = transitions.entry(q.clone()).or_default();
            if edges.contains_key(&a) {
                return Err(InvalidAutomaton::NondeterministicTransition(
                    q.show(),
                    a.show(),
                ));
            }
            edges.insert(a, p);
        }

        DFA::from_parts(
            states,
            alphabet,
            transitions,
            initial,
            self.accepting.into_iter().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn builder_collects_states_and_symbols() {
        let dfa = DFA::builder()
            .with_transitions([(0u32, 'a', 1), (1, 'a', 1), (1, 'a', 1)])
            .with_states([7])
            .with_alphabet_symbols(['c'])
            .with_accepting([1])
            .into_dfa(5)
            .unwrap();

        assert_eq!(dfa.states(), &OrderedSet::from([0, 1, 5, 7]));
        assert_eq!(dfa.alphabet().universe().copied().collect::<String>(), "ac");
        assert_eq!(dfa.initial(), &5);
        assert_eq!(dfa.accepting_states(), &OrderedSet::from([1]));
    }

    #[test]
    fn builder_rejects_malformed_input() {
        let err = DFA::builder()
            .with_transitions([(0u32, 'a', 1), (0, 'a', 2)])
            .into_dfa(0)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidAutomaton::NondeterministicTransition("0".into(), "a".into())
        );

        let err = DFA::builder()
            .with_transitions([(0u32, 'a', 1)])
            .with_accepting([4])
            .into_dfa(0)
            .unwrap_err();
        assert_eq!(err, InvalidAutomaton::UnknownAcceptingState("4".into()));
    }

    #[test]
    fn single_state_without_transitions() {
        let dfa = DFABuilder::<u32, char>::default()
            .with_accepting([0])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.size(), 1);
        assert!(dfa.alphabet().is_empty());
        assert!(dfa.accepts("".chars()));
    }
}
