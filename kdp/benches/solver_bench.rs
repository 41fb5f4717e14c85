use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use knapsack_dp::entities::Instance;
use knapsack_dp::solvers::{DPSolution, OptimizedSolver, Solver, TabulatedSolver};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, solver_bench);

const N_ITEMS: usize = 100;
const CAPACITIES: [usize; 3] = [1_000, 10_000, 50_000];

fn create_instance(capacity: usize) -> Instance {
    let mut rng = SmallRng::seed_from_u64(0);
    let values = (0..N_ITEMS).map(|_| rng.random_range(1..=100)).collect_vec();
    let weights = (0..N_ITEMS)
        .map(|_| rng.random_range(1..=capacity / 10))
        .collect_vec();
    Instance::from_parts(values, weights, capacity).expect("benchmark instance is valid")
}

/// Compares the full table with the rolling array for a growing capacity.
fn solver_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_100_items");
    for capacity in CAPACITIES {
        let instance = create_instance(capacity);
        group.throughput(criterion::Throughput::Elements(
            (N_ITEMS * (capacity + 1)) as u64,
        ));
        group.bench_with_input(
            BenchmarkId::new("tabulated", capacity),
            &instance,
            |b, i| b.iter(|| TabulatedSolver.solve(i).value()),
        );
        group.bench_with_input(
            BenchmarkId::new("optimized", capacity),
            &instance,
            |b, i| b.iter(|| OptimizedSolver.solve(i).value()),
        );
    }
    group.finish();
}
