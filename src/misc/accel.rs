use itertools::Itertools;
use num::Zero;

/// A trait for sequences that can be checked for convergence.
pub trait ConvergentSequence: Iterator<Item = f64> + Sized {
    /// Applies Aitken's Δ² process to accelerate the convergence of a
    /// sequence. See
    /// <https://en.wikipedia.org/wiki/Aitken%27s_delta-squared_process>.
    ///
    /// # Returns
    ///
    /// An iterator over the accelerated sequence.
    fn aitken(self) -> impl Iterator<Item = f64> {
        self.tuple_windows::<(_, _, _)>().filter_map(|(x, y, z)| {
            let dx = z - y;
            let dx2 = y - x;
            let ddx = dx - dx2;

            // A linear segment like [2, 4, 6] has no fixed point to jump
            // to, but a flat one like [2, 2, 2] has already converged
            if ddx.is_zero() {
                if dx.is_zero() {
                    Some(z)
                } else {
                    None
                }
            } else {
                Some(z - dx * dx / ddx)
            }
        })
    }

    /// Finds the limit of the sequence within a given tolerance using
    /// Aitken's Δ² process. This should *only* be applied to sequences that
    /// are known to converge.
    ///
    /// # Arguments
    ///
    /// * `tol` - The tolerance within which to find the limit.
    ///
    /// # Returns
    ///
    /// The limit of the sequence as a floating-point number.
    ///
    /// # Panics
    ///
    /// Panics if a finite sequence ends before converging, and runs forever
    /// if an infinite one never converges within the given tolerance.
    fn limit(self, tol: f64) -> f64 {
        self.aitken()
            .aitken()
            .aitken()
            .aitken()
            .tuple_windows::<(_, _)>()
            .filter_map(
                |(a, b)| {
                    if (a - b).abs() < tol {
                        Some(b)
                    } else {
                        None
                    }
                },
            )
            .next()
            .unwrap()
    }
}

impl<T> ConvergentSequence for T where T: Iterator<Item = f64> + Sized {}
