use tracing::trace;

use crate::prelude::*;

/// Generates a random [`DFA`] with `size` states `0..size` over the first `symbols` letters
/// of the latin alphabet. The algorithm is as follows:
/// 1. Start with `size` states and no transitions, state 0 is initial.
/// 2. For each state and each symbol, with probability `density` draw a target state uniformly
///    at random and add the corresponding transition. Otherwise the transition stays missing.
/// 3. Make each state accepting with probability one half.
///
/// Depending on the drawn transitions, some states may be unreachable. With `density` below
/// one, the result is typically a partial automaton.
pub fn generate_random_dfa(symbols: usize, size: usize, density: f64) -> DFA<u32, char> {
    assert!(size > 0, "a DFA needs at least one state");
    assert!((0.0..=1.0).contains(&density));

    let alphabet = Alphabet::of_size(symbols);
    let states: OrderedSet<u32> = (0..size as u32).collect();

    let mut transitions: OrderedMap<u32, OrderedMap<char, u32>> = OrderedMap::new();
    for &q in &states {
        for &sym in alphabet.universe() {
            if fastrand::f64() < density {
                let target = fastrand::u32(..size as u32);
                transitions.entry(q).or_default().insert(sym, target);
            }
        }
    }
    let accepting: OrderedSet<u32> = states.iter().copied().filter(|_| fastrand::bool()).collect();
    trace!(
        "generated random automaton with {} transitions, accepting {}",
        transitions.values().map(|edges| edges.len()).sum::<usize>(),
        accepting.show()
    );

    DFA {
        states,
        alphabet,
        transitions,
        initial: 0,
        accepting,
        state_mapping: None,
    }
}
