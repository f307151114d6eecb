//! Operator contract tests: every crossover and mutation operator must
//! produce permutations of the identical value set as its inputs, across
//! arbitrary parent pairs.

use evotour::crossover::Crossover;
use evotour::error::EvolveError;
use evotour::mutation::Mutation;
use evotour::rng::RandomNumberGenerator;
use evotour::tour::Tour;

const CROSSOVERS: [Crossover; 4] = [
    Crossover::Cycle,
    Crossover::Order,
    Crossover::PartiallyMapped,
    Crossover::EdgeRecombination,
];

const MUTATIONS: [Mutation; 3] = [Mutation::Insertion, Mutation::Swap, Mutation::Inversion];

fn assert_permutation(order: &[usize], n: usize) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        (0..n).collect::<Vec<_>>(),
        "not a permutation of 0..{}: {:?}",
        n,
        order
    );
}

#[test]
fn every_crossover_preserves_the_value_set() {
    let mut rng = RandomNumberGenerator::from_seed(1001);
    for op in CROSSOVERS {
        for n in [2, 3, 5, 17, 64] {
            for _ in 0..40 {
                let p1 = Tour::random(n, &mut rng);
                let p2 = Tour::random(n, &mut rng);
                let (c1, c2) = op.apply(&p1, &p2, &mut rng);
                assert_permutation(c1.order(), n);
                assert_permutation(c2.order(), n);
            }
        }
    }
}

#[test]
fn crossover_then_mutation_chains_stay_valid() {
    let mut rng = RandomNumberGenerator::from_seed(1009);
    for op in CROSSOVERS {
        for mutation in MUTATIONS {
            let p1 = Tour::random(20, &mut rng);
            let p2 = Tour::random(20, &mut rng);
            let (mut c1, mut c2) = op.apply(&p1, &p2, &mut rng);
            for _ in 0..25 {
                mutation.apply(&mut c1, &mut rng);
                mutation.apply(&mut c2, &mut rng);
            }
            assert_permutation(c1.order(), 20);
            assert_permutation(c2.order(), 20);
        }
    }
}

#[test]
fn cycle_crossover_keeps_same_parent_values_in_place() {
    // Each position draws from exactly one of the two parents, and the two
    // children always draw complementarily.
    let mut rng = RandomNumberGenerator::from_seed(1013);
    for _ in 0..200 {
        let p1 = Tour::random(12, &mut rng);
        let p2 = Tour::random(12, &mut rng);
        let (c1, c2) = Crossover::Cycle.apply(&p1, &p2, &mut rng);
        for i in 0..12 {
            let kept = c1.order()[i] == p1.order()[i] && c2.order()[i] == p2.order()[i];
            let swapped = c1.order()[i] == p2.order()[i] && c2.order()[i] == p1.order()[i];
            assert!(kept || swapped);
        }
    }
}

#[test]
fn identical_parents_reproduce_for_positional_operators() {
    let mut rng = RandomNumberGenerator::from_seed(1019);
    let p = Tour::random(10, &mut rng);
    for op in [
        Crossover::Cycle,
        Crossover::Order,
        Crossover::PartiallyMapped,
    ] {
        let (c1, c2) = op.apply(&p, &p, &mut rng);
        assert_eq!(c1.order(), p.order(), "{} altered an identical pair", op);
        assert_eq!(c2.order(), p.order(), "{} altered an identical pair", op);
    }
}

#[test]
fn mutation_changes_order_but_never_values() {
    let mut rng = RandomNumberGenerator::from_seed(1021);
    for mutation in MUTATIONS {
        for _ in 0..100 {
            let mut tour = Tour::random(15, &mut rng);
            let before = tour.order().to_vec();
            mutation.apply(&mut tour, &mut rng);
            assert_ne!(tour.order(), &before[..]);
            assert_permutation(tour.order(), 15);
            assert!(tour.needs_evaluation());
        }
    }
}

#[test]
fn operator_selectors_match_the_cli_shortnames() {
    assert_eq!("cx".parse::<Crossover>().unwrap(), Crossover::Cycle);
    assert_eq!("ox".parse::<Crossover>().unwrap(), Crossover::Order);
    assert_eq!(
        "pmx".parse::<Crossover>().unwrap(),
        Crossover::PartiallyMapped
    );
    assert_eq!(
        "erx".parse::<Crossover>().unwrap(),
        Crossover::EdgeRecombination
    );
    assert_eq!("ins".parse::<Mutation>().unwrap(), Mutation::Insertion);
    assert_eq!("swp".parse::<Mutation>().unwrap(), Mutation::Swap);
    assert_eq!("inv".parse::<Mutation>().unwrap(), Mutation::Inversion);
}

#[test]
fn unknown_selectors_are_configuration_errors() {
    for bad in ["", "CX", "two-point", "uniform"] {
        assert!(matches!(
            bad.parse::<Crossover>(),
            Err(EvolveError::Configuration(_))
        ));
    }
    for bad in ["", "INV", "scramble"] {
        assert!(matches!(
            bad.parse::<Mutation>(),
            Err(EvolveError::Configuration(_))
        ));
    }
}
