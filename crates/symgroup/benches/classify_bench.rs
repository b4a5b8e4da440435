//! Criterion benches for the per-map pipeline.
//!
//! - Full classification of the Platonic solids and a few large prisms.
//! - Automorphism enumeration alone on shuffled copies (no cache effects from
//!   the tidy vertex order of the generators).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use symgroup::families;
use symgroup::relabel::shuffle;
use symgroup::Workspace;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let cases = [
        ("tetrahedron", families::tetrahedron()),
        ("cube", families::cube()),
        ("dodecahedron", families::dodecahedron()),
        ("icosahedron", families::icosahedron()),
        ("prism(50)", families::prism(50)),
        ("antiprism(50)", families::antiprism(50)),
        ("chiral_antiprism(40)", families::chiral_antiprism(40)),
    ];
    let mut ws = Workspace::new();
    for (name, code) in &cases {
        group.bench_function(BenchmarkId::new("classify", name), |b| {
            b.iter(|| {
                let _ = ws.classify(code);
            })
        });
    }
    group.finish();
}

fn bench_automorphisms(c: &mut Criterion) {
    let mut group = c.benchmark_group("automorphisms");
    let mut rng = StdRng::seed_from_u64(7);
    for n in [10usize, 100, 300] {
        let code = families::gyroelongated_bipyramid(n);
        let mut ws = Workspace::new();
        group.bench_function(BenchmarkId::new("gyroelongated_bipyramid", n), |b| {
            b.iter_batched(
                || shuffle(&code, &mut rng).unwrap_or_else(|_| code.clone()),
                |shuffled| {
                    if ws.load(&shuffled).is_ok() {
                        let _ = ws.determine_automorphisms().order();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_automorphisms);
criterion_main!(benches);
