use num_traits::Zero;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::ops::AddAssign;

/// Cumulative sum of `xs`
///
/// # Example
///
/// Running hit counts from in-circle indicators
///
/// ```rust
/// # use mcpi::misc::cumsum;
/// let hits: Vec<u32> = vec![1, 0, 1, 1];
/// assert_eq!(cumsum(&hits), vec![1, 1, 2, 3]);
/// ```
pub fn cumsum<T>(xs: &[T]) -> Vec<T>
where
    T: AddAssign + Copy + Zero,
{
    xs.iter()
        .scan(T::zero(), |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Derive `n` child seeds from a master seed.
///
/// Multi-run experiments give each run its own generator. Seeding the child
/// generators from a single master generator makes the whole experiment
/// reproducible from one number.
///
/// # Example
///
/// ```rust
/// # use mcpi::misc::seed_sequence;
/// let seeds = seed_sequence(1337, 3);
///
/// assert_eq!(seeds.len(), 3);
/// assert_eq!(seeds, seed_sequence(1337, 3));
/// ```
pub fn seed_sequence(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}
