use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evotour::{
    crossover::Crossover,
    distance::DistanceModel,
    evolution::{EvolutionEngine, EvolutionOptions},
    mutation::Mutation,
    rng::RandomNumberGenerator,
    scenario::random_positions,
    selection::TournamentSelection,
    tour::Tour,
};

fn bench_crossover(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("crossover");
    for size in [10, 100, 1000].iter() {
        let p1 = Tour::random(*size, &mut rng);
        let p2 = Tour::random(*size, &mut rng);
        for (name, op) in [
            ("cx", Crossover::Cycle),
            ("ox", Crossover::Order),
            ("pmx", Crossover::PartiallyMapped),
            ("erx", Crossover::EdgeRecombination),
        ] {
            group.bench_function(&format!("{}_{}", name, size), |b| {
                b.iter(|| op.apply(black_box(&p1), black_box(&p2), &mut rng))
            });
        }
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(43);

    let mut group = c.benchmark_group("mutation");
    for size in [100, 1000].iter() {
        for (name, op) in [
            ("ins", Mutation::Insertion),
            ("swp", Mutation::Swap),
            ("inv", Mutation::Inversion),
        ] {
            group.bench_function(&format!("{}_{}", name, size), |b| {
                let mut tour = Tour::random(*size, &mut rng);
                b.iter(|| op.apply(black_box(&mut tour), &mut rng))
            });
        }
    }
    group.finish();
}

fn bench_generation_loop(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(44);
    let positions = random_positions(50, -1000, 1000, &mut rng);
    let distances = DistanceModel::from_coordinates(&positions).unwrap();

    let mut group = c.benchmark_group("generation_loop");
    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(&format!("50_locations_{}", label), |b| {
            b.iter(|| {
                let options = EvolutionOptions::builder()
                    .num_generations(10)
                    .population_size(64)
                    .crossover(Crossover::Order, 0.9)
                    .mutation(Mutation::Inversion, 0.2)
                    .seed(7)
                    .parallel(parallel)
                    .build()
                    .unwrap();
                let mut engine = EvolutionEngine::new(
                    distances.clone(),
                    options,
                    TournamentSelection::default(),
                )
                .unwrap();
                engine.run(|_| {}).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_crossover, bench_mutation, bench_generation_loop);
criterion_main!(benches);
