use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::prelude::*;

/// Type alias for a minimal representative of a state which is its length-lexicographically
/// minimal access sequence together with the state itself.
pub type MinimalRepresentative<'a, Q, S> = (Vec<S>, &'a Q);

/// Iterator over the minimal representatives of the states of a [`DFA`] that are reachable
/// from a given origin. A minimal representative for a state `q` is the length-lexicographically
/// minimal word with which `q` can be reached. The states are produced in breadth-first order,
/// which is the order of their minimal representatives.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a, Q: StateId, S: Symbol> {
    dfa: &'a DFA<Q, S>,
    seen: Set<&'a Q>,
    queue: VecDeque<MinimalRepresentative<'a, Q, S>>,
}

impl<'a, Q: StateId, S: Symbol> MinimalRepresentatives<'a, Q, S> {
    /// Starts the search in `origin`.
    pub fn new(dfa: &'a DFA<Q, S>, origin: &'a Q) -> Self {
        let seen = Set::from_iter([origin]);
        let queue = VecDeque::from([(vec![], origin)]);
        Self { dfa, seen, queue }
    }
}

impl<'a, Q: StateId, S: Symbol> Iterator for MinimalRepresentatives<'a, Q, S> {
    type Item = MinimalRepresentative<'a, Q, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        let dfa = self.dfa;
        for sym in dfa.alphabet().universe() {
            if let Some(p) = dfa.successor(q, sym) {
                if self.seen.insert(p) {
                    let mut new_access = access.clone();
                    new_access.push(sym.clone());
                    self.queue.push_back((new_access, p));
                }
            }
        }
        Some((access, q))
    }
}

/// Allows iterating over the states of a [`DFA`] that are reachable from a given origin,
/// in breadth-first order.
#[derive(Debug, Clone)]
pub struct ReachableStates<'a, Q: StateId, S: Symbol>(MinimalRepresentatives<'a, Q, S>);

impl<'a, Q: StateId, S: Symbol> ReachableStates<'a, Q, S> {
    /// Starts the search in `origin`.
    pub fn new(dfa: &'a DFA<Q, S>, origin: &'a Q) -> Self {
        Self(MinimalRepresentatives::new(dfa, origin))
    }
}

impl<'a, Q: StateId, S: Symbol> Iterator for ReachableStates<'a, Q, S> {
    type Item = &'a Q;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, q)| q)
    }
}

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Returns an iterator over the minimal representatives of all states that are reachable
    /// from the initial state.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_, Q, S> {
        MinimalRepresentatives::new(self, self.initial())
    }

    /// Returns an iterator over the minimal representatives of all states that are reachable
    /// from `origin`.
    pub fn minimal_representatives_from<'a>(
        &'a self,
        origin: &'a Q,
    ) -> MinimalRepresentatives<'a, Q, S> {
        MinimalRepresentatives::new(self, origin)
    }

    /// Iterates over the states reachable from the initial state, including the initial
    /// state itself.
    pub fn reachable_states(&self) -> ReachableStates<'_, Q, S> {
        ReachableStates::new(self, self.initial())
    }

    /// Iterates over the states that are reachable from `origin`.
    pub fn reachable_states_from<'a>(&'a self, origin: &'a Q) -> ReachableStates<'a, Q, S> {
        ReachableStates::new(self, origin)
    }

    /// Returns true if every state is reachable from the initial state.
    pub fn is_trim(&self) -> bool {
        self.reachable_states().count() == self.size()
    }

    /// Removes all states that are not reachable from the initial state, together with their
    /// outgoing transitions. Accepting states that are removed are no longer accepting and if
    /// the automaton was minimized before, the merged states that are removed also disappear
    /// from the [`DFA::state_mapping`].
    ///
    /// Transitions of reachable states can only lead to reachable states, so restricting the
    /// transition function to the reachable sources leaves no dangling targets. Transitions
    /// of sources that are not even in [`DFA::states`] are dropped as well.
    pub fn prune_unreachable_in_place(&mut self) {
        let reachable: OrderedSet<Q> = self.reachable_states().cloned().collect();
        if reachable.len() == self.size() && self.transitions.keys().all(|q| reachable.contains(q))
        {
            trace!("all {} states are reachable", self.size());
            return;
        }

        debug!(
            "pruning {} unreachable states, keeping {}",
            self.size() - reachable.len(),
            reachable.show()
        );
        self.transitions.retain(|q, _| reachable.contains(q));
        self.accepting.retain(|q| reachable.contains(q));
        if let Some(mapping) = self.state_mapping.as_mut() {
            mapping.retain(|merged, _| reachable.contains(merged));
        }
        self.states = reachable;
    }

    /// Consumes `self` and returns the automaton restricted to its reachable states, see
    /// [`DFA::prune_unreachable_in_place`].
    pub fn prune_unreachable(mut self) -> Self {
        self.prune_unreachable_in_place();
        self
    }
}
