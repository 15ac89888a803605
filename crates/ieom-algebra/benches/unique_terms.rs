use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ieom_algebra::{deduplicate, make_annihilator, make_creator, make_term, HubbardOperator, Term};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_terms(count: usize, sites: usize, seed: u64) -> Vec<Term<f64, HubbardOperator>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let operators: Vec<HubbardOperator> = (0..3)
                .map(|_| {
                    let index = rng.gen_range(0..sites);
                    let spin = rng.gen::<bool>();
                    if rng.gen::<bool>() {
                        make_creator(index, spin)
                    } else {
                        make_annihilator(index, spin)
                    }
                })
                .collect();
            make_term(rng.gen_range(-1.0..1.0), operators)
        })
        .collect()
}

fn bench_deduplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("deduplicate");
    for &count in &[256usize, 4096] {
        let terms = random_terms(count, 8, 7);
        group.bench_with_input(BenchmarkId::from_parameter(count), &terms, |b, terms| {
            b.iter(|| deduplicate(black_box(terms)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deduplicate);
criterion_main!(benches);
