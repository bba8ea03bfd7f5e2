// Run several independently seeded simulations and average their
// convergence traces. Each run gets a child seed derived from the master
// seed, so the whole experiment reproduces from one number.
use mcpi::misc::seed_sequence;
use mcpi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::f64::consts::PI;

fn main() {
    let n_samples: usize = 10_000;
    let n_runs: usize = 50;
    let master_seed: u64 = 42;

    println!("master seed: {}", master_seed);
    println!("simulations: {}", n_runs);

    let estimator = BatchEstimator::default();

    let traces: Vec<EstimateTrace> = seed_sequence(master_seed, n_runs)
        .iter()
        .enumerate()
        .map(|(ix, &seed)| {
            let mut rng = Xoshiro256Plus::seed_from_u64(seed);
            let trace = estimator.trace(n_samples, &mut rng);
            println!(
                "simulation #{} (seed={}): π_est = {}",
                ix + 1,
                seed,
                trace.final_estimate().unwrap()
            );
            trace
        })
        .collect();

    let mean = EstimateTrace::mean(&traces).unwrap();
    let pi_est = mean.final_estimate().unwrap();

    println!(
        "averaged over {} runs: π_est = {}, absolute error = {}",
        n_runs,
        pi_est,
        (pi_est - PI).abs()
    );
}
