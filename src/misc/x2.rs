use special::Gamma;

/// Χ<sup>2</sup> (Chi-squared) test.
///
/// # Example
///
/// Test whether the in/out counts from a sampling run are consistent with the
/// π/4 hit rate.
///
/// ```
/// use mcpi::consts::QUARTER_PI;
/// use mcpi::misc::x2_test;
///
/// // Counts of points inside and outside the circle
/// let f_obs: Vec<u32> = vec![7854, 2146];
///
/// // The probability with which each entry should occur
/// let ps: Vec<f64> = vec![QUARTER_PI, 1.0 - QUARTER_PI];
///
/// let (_, p) = x2_test(&f_obs, &ps);
/// assert!(p > 0.05);
/// ```
///
/// # Panics
///
/// Panics if `f_obs` has fewer than two cells; with k cells the statistic
/// has k - 1 degrees of freedom.
pub fn x2_test(f_obs: &[u32], ps: &[f64]) -> (f64, f64) {
    let k = f_obs.len();
    if k < 2 {
        panic!("Too few cells");
    }
    let nf = f_obs.iter().fold(0, |acc, ct| acc + ct) as f64;
    let x2 = nf
        * f_obs.iter().zip(ps.iter()).fold(0.0, |acc, (&o, &p)| {
            acc + (f64::from(o) / nf - p).powi(2) / p
        });

    let df = (k - 1) as f64;
    let p = 1.0 - (x2 / 2.0).inc_gamma(df / 2.0);
    (x2, p)
}
