// Use a Monte Carlo method known as 'rejection sampling' to estimate the
// value of pi. We draw samples from a square, within which there is a
// perfectly inscribed circle, and use an estimate of the ratio of the areas
// to estimate pi.
//
//  A_circle      pi * r^2    pi         # in circle
// ----------  =  -------- = ----  => 4 ------------- ~= pi
//  A_square      4 * r^2      4         # in square
//
use mcpi::prelude::*;
use std::f64::consts::PI;

fn main() {
    // The number of samples to use for the Monte Carlo estimate
    let n_samples: usize = 1_000_000;

    let square = Square::unit();
    let circle = square.inscribed_circle();

    println!("square area: {}", square.area());
    println!("inscribed circle area: {}", circle.area());
    println!(
        "4 * (circle area / square area): {}",
        4.0 * (circle.area() / square.area())
    );

    let mut rng = rand::thread_rng();
    let estimator = StepwiseEstimator::new(square);

    let tally = estimator.tally(n_samples, &mut rng);
    let pi_est = tally.estimate().unwrap();

    println!("points inside circle: {}", tally.hits());
    println!("total points: {}", tally.n());
    println!(
        "π_est: {}, π_true: {}, absolute error: {}",
        pi_est,
        PI,
        (pi_est - PI).abs()
    );
    println!("standard error: {}", tally.std_err().unwrap());
}
