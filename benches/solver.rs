use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use threesat::{solver, Generator, Instance};

fn satisfiable(num_variables: usize, num_clauses: usize) -> Instance {
    Generator::new(StdRng::seed_from_u64(num_variables as u64))
        .random_satisfiable_instance(num_variables, num_clauses)
        .unwrap()
}

fn benchmark_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");

    // Planted instances with a fixed clause count, as the variable count grows
    for size in [10, 12, 14, 16] {
        let instance = satisfiable(size, 30);
        group.bench_function(BenchmarkId::new("exists", size), |b| {
            b.iter(|| {
                let mut instance = instance.clone();
                assert!(solver::exists(black_box(&mut instance)));
            })
        });
        group.bench_function(BenchmarkId::new("exists_full", size), |b| {
            b.iter(|| {
                let mut instance = instance.clone();
                assert!(solver::exists_full(black_box(&mut instance)));
            })
        });
    }

    group.finish();
}

fn benchmark_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristics");

    // Clause density from 1 to 9 clauses per variable
    for rho in [1, 3, 5, 7, 9] {
        let instance = satisfiable(10, rho * 10);
        group.bench_function(BenchmarkId::new("greedy", rho), |b| {
            b.iter(|| {
                let mut instance = instance.clone();
                solver::greedy_assign(black_box(&mut instance)).unwrap()
            })
        });
        group.bench_function(BenchmarkId::new("grasp", rho), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| {
                let mut instance = instance.clone();
                solver::grasp_search(black_box(&mut instance), 100, &mut rng).unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [10, 100, 1000] {
        group.bench_function(BenchmarkId::new("random_satisfiable_instance", size), |b| {
            let mut generator = Generator::new(StdRng::seed_from_u64(0));
            b.iter(|| {
                generator
                    .random_satisfiable_instance(black_box(size), size * 4)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_exhaustive,
    benchmark_heuristics,
    benchmark_generation
);
criterion_main!(benches);
