use automata_minimize::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn minimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for size in [10usize, 50, 200] {
        let automata = (0..10)
            .map(|_| generate_random_dfa(3, size, 0.9))
            .collect::<Vec<_>>();

        group.bench_with_input(BenchmarkId::new("prune", size), &automata, |b, automata| {
            b.iter(|| {
                for dfa in automata {
                    black_box(dfa.clone().prune_unreachable());
                }
            })
        });
        group.bench_with_input(
            BenchmarkId::new("minimized", size),
            &automata,
            |b, automata| {
                b.iter(|| {
                    for dfa in automata {
                        black_box(dfa.clone().minimized());
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, minimization);
criterion_main!(benches);
