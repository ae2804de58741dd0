use std::borrow::Borrow;

use crate::prelude::*;

use super::invalid::InvalidAutomaton;

/// A deterministic finite automaton (DFA). It consists of a finite set of states, an
/// [`Alphabet`], a transition function, a designated initial state and a set of accepting
/// states. It accepts a finite word if the run on that word reaches an accepting state.
///
/// The transition function may be partial: if there is no transition for some state and
/// symbol, the run on any word that needs it gets stuck and the word is rejected. Missing
/// transitions are never filled in by the operations of this crate, in particular there
/// is no implicit sink state.
///
/// After `DFA::minimize` has been applied, every state is a merged state and
/// [`DFA::state_mapping`] tells which of the originally given states it stands for.
///
/// # Example
/// ```
/// use automata_minimize::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_transitions([(0u32, 'a', 1), (1, 'a', 0), (1, 'b', 1)])
///     .with_accepting([1])
///     .into_dfa(0)
///     .unwrap();
/// assert!(dfa.accepts("ab".chars()));
/// assert!(!dfa.accepts("aa".chars()));
/// assert!(!dfa.accepts("b".chars()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DFA<Q: StateId = u32, S: Symbol = char> {
    pub(crate) states: OrderedSet<Q>,
    pub(crate) alphabet: Alphabet<S>,
    pub(crate) transitions: OrderedMap<Q, OrderedMap<S, Q>>,
    pub(crate) initial: Q,
    pub(crate) accepting: OrderedSet<Q>,
    pub(crate) state_mapping: Option<Bijection<Q, OrderedSet<Q>>>,
}

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Instantiates a new [`DFABuilder`].
    pub fn builder() -> DFABuilder<Q, S> {
        DFABuilder::default()
    }

    /// Creates a DFA from its five constituents. Fails with an [`InvalidAutomaton`] if the
    /// parts do not fit together, i.e. if the initial state or an accepting state is not in
    /// `states`, if a transition uses a symbol that is not in `alphabet` or if a reachable
    /// state has a transition into a state that is not in `states`. Transitions in the
    /// unreachable part may mention arbitrary states, see [`DFA::validate`].
    pub fn from_parts(
        states: OrderedSet<Q>,
        alphabet: Alphabet<S>,
        mut transitions: OrderedMap<Q, OrderedMap<S, Q>>,
        initial: Q,
        accepting: OrderedSet<Q>,
    ) -> Result<Self, InvalidAutomaton> {
        transitions.retain(|_, edges| !edges.is_empty());
        let dfa = Self {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
            state_mapping: None,
        };
        dfa.validate()?;
        Ok(dfa)
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the set of all states.
    pub fn states(&self) -> &OrderedSet<Q> {
        &self.states
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the transition function as a map from states to their outgoing transitions.
    /// States without any outgoing transition do not appear as keys.
    pub fn transitions(&self) -> &OrderedMap<Q, OrderedMap<S, Q>> {
        &self.transitions
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &Q {
        &self.initial
    }

    /// Returns the set of accepting states.
    pub fn accepting_states(&self) -> &OrderedSet<Q> {
        &self.accepting
    }

    /// Returns an iterator over the states that are not accepting.
    pub fn rejecting_states(&self) -> impl Iterator<Item = &Q> + '_ {
        self.states.iter().filter(|q| !self.accepting.contains(*q))
    }

    /// Returns true if `q` is an accepting state.
    pub fn is_accepting(&self, q: &Q) -> bool {
        self.accepting.contains(q)
    }

    /// Returns the target of the transition from `q` on `symbol`, or `None` if there is no
    /// such transition.
    pub fn successor(&self, q: &Q, symbol: &S) -> Option<&Q> {
        self.transitions.get(q).and_then(|edges| edges.get(symbol))
    }

    /// Iterates over the outgoing transitions of `q` as pairs of symbol and target.
    pub fn edges_from(&self, q: &Q) -> impl Iterator<Item = (&S, &Q)> + '_ {
        self.transitions.get(q).into_iter().flat_map(|edges| edges.iter())
    }

    /// Returns the mapping from merged states to the original states they subsume. This
    /// is `None` unless the automaton has been minimized.
    pub fn state_mapping(&self) -> Option<&Bijection<Q, OrderedSet<Q>>> {
        self.state_mapping.as_ref()
    }

    /// Looks up the merged state that the `original` state was merged into. Returns
    /// `None` if the automaton has not been minimized, or if `original` was unreachable
    /// and thus not part of any merged state.
    pub fn merged_state_of(&self, original: &Q) -> Option<&Q> {
        self.state_mapping
            .as_ref()?
            .iter()
            .find_map(|(merged, class)| class.contains(original).then_some(merged))
    }

    /// Runs `word` from the initial state and returns the state that is reached. If the
    /// run gets stuck on a missing transition, `None` is returned.
    pub fn run<W, B>(&self, word: W) -> Option<&Q>
    where
        W: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        self.run_from(&self.initial, word)
    }

    /// Runs `word` from the state `origin`, see [`DFA::run`].
    pub fn run_from<'a, W, B>(&'a self, origin: &'a Q, word: W) -> Option<&'a Q>
    where
        W: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        word.into_iter()
            .try_fold(origin, |q, symbol| self.successor(q, symbol.borrow()))
    }

    /// Returns true if and only if the run on `word` exists and ends in an accepting state.
    pub fn accepts<W, B>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        self.run(word).is_some_and(|q| self.is_accepting(q))
    }

    /// Verifies that the initial state and all accepting states are states of `self`, that
    /// every transition is labelled with a symbol of the alphabet and that every transition
    /// leaving a reachable state leads to a state of `self`.
    ///
    /// Transitions in the unreachable part may mention states that are not in `self`, they
    /// disappear with [`DFA::prune_unreachable_in_place`].
    pub fn validate(&self) -> Result<(), InvalidAutomaton> {
        if !self.states.contains(&self.initial) {
            return Err(InvalidAutomaton::UnknownInitialState(self.initial.show()));
        }
        if let Some(q) = self.accepting.iter().find(|q| !self.states.contains(*q)) {
            return Err(InvalidAutomaton::UnknownAcceptingState(q.show()));
        }
        for (q, edges) in &self.transitions {
            if let Some(symbol) = edges.keys().find(|a| !self.alphabet.contains(a)) {
                return Err(InvalidAutomaton::UnknownSymbol(q.show(), symbol.show()));
            }
        }
        // a reachable state is the initial state or the target of a transition checked before
        for q in self.reachable_states() {
            if let Some((symbol, p)) = self.edges_from(q).find(|(_, p)| !self.states.contains(*p)) {
                return Err(InvalidAutomaton::UnknownTarget(
                    q.show(),
                    symbol.show(),
                    p.show(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn parts() -> (
        OrderedSet<String>,
        Alphabet<char>,
        OrderedMap<String, OrderedMap<char, String>>,
    ) {
        let states = ["p", "q", "r"].into_iter().map(String::from).collect();
        let alphabet = ['a', 'b'].into_iter().collect();
        let transitions = OrderedMap::from([
            (
                "p".to_string(),
                OrderedMap::from([('a', "q".to_string()), ('b', "p".to_string())]),
            ),
            ("q".to_string(), OrderedMap::from([('a', "q".to_string())])),
            ("r".to_string(), OrderedMap::new()),
        ]);
        (states, alphabet, transitions)
    }

    #[test]
    fn dfa_from_parts() {
        let (states, alphabet, transitions) = parts();
        let dfa = DFA::from_parts(
            states,
            alphabet,
            transitions,
            "p".to_string(),
            OrderedSet::from(["q".to_string()]),
        )
        .unwrap();

        assert_eq!(dfa.size(), 3);
        // empty transition maps are not kept around
        assert_eq!(dfa.transitions().len(), 2);
        assert_eq!(dfa.initial(), "p");
        assert!(dfa.is_accepting(&"q".to_string()));
        assert_eq!(dfa.rejecting_states().count(), 2);
        assert_eq!(dfa.successor(&"p".to_string(), &'a'), Some(&"q".to_string()));
        assert_eq!(dfa.successor(&"q".to_string(), &'b'), None);
        assert_eq!(dfa.edges_from(&"p".to_string()).count(), 2);
        assert_eq!(dfa.edges_from(&"r".to_string()).count(), 0);
        assert!(dfa.state_mapping().is_none());
        assert!(dfa.merged_state_of(&"p".to_string()).is_none());
    }

    #[test]
    fn malformed_parts_are_rejected() {
        let (states, alphabet, transitions) = parts();
        let err = DFA::from_parts(
            states.clone(),
            alphabet.clone(),
            transitions.clone(),
            "x".to_string(),
            OrderedSet::new(),
        )
        .unwrap_err();
        assert_eq!(err, InvalidAutomaton::UnknownInitialState("x".to_string()));

        let err = DFA::from_parts(
            states.clone(),
            alphabet.clone(),
            transitions.clone(),
            "p".to_string(),
            OrderedSet::from(["y".to_string()]),
        )
        .unwrap_err();
        assert_eq!(err, InvalidAutomaton::UnknownAcceptingState("y".to_string()));

        let mut dangling = transitions.clone();
        dangling.insert("q".to_string(), OrderedMap::from([('b', "z".to_string())]));
        let err = DFA::from_parts(
            states.clone(),
            alphabet.clone(),
            dangling,
            "p".to_string(),
            OrderedSet::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidAutomaton::UnknownTarget("q".to_string(), "b".to_string(), "z".to_string())
        );

        let mut unknown_symbol = transitions;
        unknown_symbol.insert("r".to_string(), OrderedMap::from([('c', "p".to_string())]));
        let err = DFA::from_parts(
            states,
            alphabet,
            unknown_symbol,
            "p".to_string(),
            OrderedSet::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidAutomaton::UnknownSymbol("r".to_string(), "c".to_string())
        );
        assert_eq!(
            err.to_string(),
            "transition from `r` uses symbol `c`, which is not part of the alphabet"
        );
    }

    #[test_log::test]
    fn dangling_states_in_unreachable_part() {
        let transitions = OrderedMap::from([
            (0u32, OrderedMap::from([('a', 1)])),
            (5, OrderedMap::from([('a', 6)])),
        ]);
        let dfa = DFA::from_parts(
            OrderedSet::from([0, 1]),
            ['a'].into_iter().collect(),
            transitions,
            0,
            OrderedSet::from([1]),
        )
        .unwrap();
        assert!(dfa.accepts(['a']));
        assert_eq!(dfa.transitions().len(), 2);

        let pruned = dfa.prune_unreachable();
        assert_eq!(pruned.states(), &OrderedSet::from([0, 1]));
        assert_eq!(pruned.transitions().keys().copied().collect::<Vec<_>>(), vec![0]);
        assert!(pruned.validate().is_ok());

        // unknown symbols are rejected even where nothing can reach them
        let transitions = OrderedMap::from([
            (0u32, OrderedMap::from([('a', 1)])),
            (5, OrderedMap::from([('b', 6)])),
        ]);
        let err = DFA::from_parts(
            OrderedSet::from([0, 1]),
            ['a'].into_iter().collect(),
            transitions,
            0,
            OrderedSet::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidAutomaton::UnknownSymbol("5".to_string(), "b".to_string())
        );
    }

    #[test]
    fn runs_on_partial_transitions() {
        let dfa = DFA::builder()
            .with_transitions([(0u32, 'a', 1), (1, 'b', 0)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();

        assert_eq!(dfa.run("ab".chars()), Some(&0));
        assert_eq!(dfa.run_from(&1, ['b', 'a']), Some(&1));
        assert_eq!(dfa.run(&['b']), None);
        assert!(dfa.accepts("aba".chars()));
        assert!(!dfa.accepts("".chars()));
        // stuck runs reject
        assert!(!dfa.accepts("abb".chars()));
    }
}
