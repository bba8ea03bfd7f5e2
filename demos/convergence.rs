// Write the two figures: the running estimate converging toward pi, and a
// classified sample showing which points landed inside the circle.
//
// Run with: cargo run --example convergence --features plot
use mcpi::plot::{convergence_figure, sample_scatter};
use mcpi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn main() {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let estimator = BatchEstimator::default();

    let trace = estimator.trace(10_000, &mut rng);
    println!("final estimate: {}", trace.final_estimate().unwrap());

    convergence_figure(&trace, "convergence.svg").unwrap();
    println!("wrote convergence.svg");

    let points = estimator.classified_sample(1_000, &mut rng);
    sample_scatter(estimator.square(), &points, "sample_scatter.svg").unwrap();
    println!("wrote sample_scatter.svg");
}
