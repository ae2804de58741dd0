pub(crate) mod partition_refinement;

use tracing::{debug, trace};

use crate::prelude::*;

impl<Q: StateId, S: Symbol> DFA<Q, S> {
    /// Computes the classes of states that cannot be distinguished by any word, using Moore's
    /// partition refinement. Two states end up in the same class if and only if for every word,
    /// the runs from both states either both get stuck or both end in states of the same
    /// acceptance. The class containing the smallest state comes first.
    pub fn equivalence_classes(&self) -> Partition<Q> {
        partition_refinement::moore_partition_refinement(self)
    }

    /// Returns true if no two distinct states of `self` are equivalent.
    pub fn is_minimal(&self) -> bool {
        self.equivalence_classes().size() == self.size()
    }

    /// Merges all equivalent states of `self`, see [`DFA::equivalence_classes`].
    ///
    /// Every class becomes one merged state, named by [`StateId::for_class`] with the position
    /// of the class. The transitions of a merged state are those of the smallest state in the
    /// class, redirected to the merged states, and it is accepting if that state is. Missing
    /// transitions stay missing. Afterwards [`DFA::state_mapping`] maps each merged state to
    /// the states it subsumes. If `self` was already minimized before, the mapping refers to
    /// the states of the automaton as it was originally constructed.
    ///
    /// Unreachable states are merged as well and may survive in classes of their own, so
    /// [`DFA::prune_unreachable_in_place`] should be applied first, as [`DFA::minimized`] does.
    pub fn minimize_in_place(&mut self) {
        let partition = self.equivalence_classes();
        debug!(
            "merging {} states into {} classes",
            self.size(),
            partition.size()
        );

        let labels = partition.labelling();
        let merged: Vec<Q> = (0..partition.size()).map(Q::for_class).collect();

        let mut transitions = OrderedMap::new();
        let mut accepting = OrderedSet::new();
        let mut mapping = Bijection::new();
        for (id, class) in merged.iter().zip(partition.iter()) {
            let Some(representative) = class.first() else {
                continue;
            };
            let is_accepting = self.is_accepting(representative);
            debug_assert!(class.iter().all(|q| self.is_accepting(q) == is_accepting));
            if is_accepting {
                accepting.insert(id.clone());
            }

            let edges: OrderedMap<S, Q> = self
                .edges_from(representative)
                .filter_map(|(a, p)| Some((a.clone(), merged[*labels.get(p)?].clone())))
                .collect();
            if !edges.is_empty() {
                transitions.insert(id.clone(), edges);
            }

            let originals: OrderedSet<Q> = match &self.state_mapping {
                Some(previous) => class
                    .iter()
                    .filter_map(|q| previous.get_by_left(q))
                    .flatten()
                    .cloned()
                    .collect(),
                None => class.clone(),
            };
            trace!("{} stands for {}", id.show(), originals.show());
            mapping.insert(id.clone(), originals);
        }

        let initial = partition
            .class_of(&self.initial)
            .map(|class| merged[class].clone())
            .unwrap_or_else(|| self.initial.clone());

        self.states = merged.into_iter().collect();
        self.transitions = transitions;
        self.accepting = accepting;
        self.initial = initial;
        self.state_mapping = Some(mapping);
    }

    /// Consumes `self` and returns the automaton in which equivalent states are merged, see
    /// [`DFA::minimize_in_place`].
    pub fn minimize(mut self) -> Self {
        self.minimize_in_place();
        self
    }

    /// Consumes `self` and returns the unique (up to renaming of states) minimal automaton
    /// accepting the same language, by first removing unreachable states and then merging
    /// equivalent ones.
    ///
    /// # Example
    /// ```
    /// use automata_minimize::prelude::*;
    ///
    /// let dfa = DFA::builder()
    ///     .with_transitions([(0u32, 'a', 1), (1, 'a', 2), (2, 'a', 1), (3, 'a', 0)])
    ///     .with_accepting([1, 2])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// let minimal = dfa.clone().minimized();
    /// assert_eq!(minimal.size(), 2);
    /// assert!(minimal.equivalent(&dfa));
    /// ```
    pub fn minimized(self) -> Self {
        self.prune_unreachable().minimize()
    }
}
