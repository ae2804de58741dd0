use itertools::Itertools;
use tracing::trace;

use crate::prelude::*;

/// The signature of a state in one round of refinement: the class it currently belongs to,
/// followed by the class of its successor for every symbol in alphabet order. `None` marks
/// a missing transition.
type Signature = (usize, Vec<Option<usize>>);

/// Computes the coarsest partition of the states of `dfa` that separates accepting from
/// rejecting states and is compatible with the transitions, using Moore's algorithm.
///
/// Every state carries an integer class label. In each round, states are regrouped by their
/// [`Signature`] and the groups become the classes of the next round, numbered in order of
/// their first member. Refinement only ever splits classes, so the partition is stable as soon
/// as a round does not increase the number of classes. This happens after at most as many
/// rounds as there are states.
///
/// Missing transitions are compared as such: a state without a transition on some symbol
/// is distinguished from every state that has one, whatever the target.
pub(crate) fn moore_partition_refinement<Q: StateId, S: Symbol>(dfa: &DFA<Q, S>) -> Partition<Q> {
    let states = dfa.states().iter().collect_vec();
    let position: Map<&Q, usize> = states.iter().enumerate().map(|(i, q)| (*q, i)).collect();

    let initial: Map<bool, usize> = states
        .iter()
        .map(|q| dfa.is_accepting(q))
        .unique()
        .enumerate()
        .map(|(class, accepting)| (accepting, class))
        .collect();
    let mut labels = states
        .iter()
        .map(|q| initial[&dfa.is_accepting(q)])
        .collect_vec();
    let mut classes = initial.len();
    trace!("initial partition has {classes} classes");

    let mut round = 0;
    loop {
        round += 1;
        let mut signatures: Map<Signature, usize> = Map::default();
        let refined = states
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let successors = dfa
                    .alphabet()
                    .universe()
                    .map(|a| {
                        dfa.successor(q, a)
                            .and_then(|p| position.get(p))
                            .map(|j| labels[*j])
                    })
                    .collect_vec();
                let fresh = signatures.len();
                *signatures.entry((labels[i], successors)).or_insert(fresh)
            })
            .collect_vec();

        let refined_classes = signatures.len();
        trace!("refinement round {round} split {classes} classes into {refined_classes}");
        labels = refined;
        if refined_classes == classes {
            break;
        }
        classes = refined_classes;
    }

    let mut partition = vec![OrderedSet::new(); classes];
    for (q, label) in states.into_iter().zip(labels) {
        partition[label].insert(q.clone());
    }
    Partition::from(partition)
}
