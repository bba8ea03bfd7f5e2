#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::traits::SuffStat;

/// Running tally of in-circle hits.
///
/// Contains the number of points observed and the number that landed inside
/// the circle. The tally is all an estimator needs to keep: the estimate of π
/// is a function of (n, hits) alone, so both estimators reduce their draws to
/// a `HitTally` and agree exactly whenever their counts agree.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct HitTally {
    n: usize,
    hits: usize,
}

impl HitTally {
    /// Create a new empty tally
    #[inline]
    pub fn new() -> Self {
        HitTally { n: 0, hits: 0 }
    }

    /// Create a tally from components without checking whether they are
    /// valid.
    #[inline]
    pub fn from_parts_unchecked(n: usize, hits: usize) -> Self {
        HitTally { n, hits }
    }

    /// Get the total number of points observed, n.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::HitTally;
    /// # use mcpi::traits::SuffStat;
    /// let mut tally = HitTally::new();
    ///
    /// tally.observe(&true);
    /// tally.observe(&false);
    ///
    /// assert_eq!(tally.n(), 2);
    /// ```
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the number of points that landed inside the circle.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::HitTally;
    /// # use mcpi::traits::SuffStat;
    /// let mut tally = HitTally::new();
    ///
    /// tally.observe(&true);
    /// tally.observe(&false);
    ///
    /// assert_eq!(tally.hits(), 1);
    /// ```
    #[inline]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of points that landed outside the circle
    #[inline]
    pub fn misses(&self) -> usize {
        self.n - self.hits
    }

    /// The observed in-circle frequency, hits / n, or `None` if the tally is
    /// empty
    #[inline]
    pub fn hit_rate(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(self.hits as f64 / self.n as f64)
        }
    }

    /// The Monte Carlo estimate of π, 4 hits / n, or `None` if the tally is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::HitTally;
    /// let tally = HitTally::from_parts_unchecked(10_000, 7854);
    /// assert!((tally.estimate().unwrap() - 3.1416).abs() < 1E-12);
    ///
    /// assert!(HitTally::new().estimate().is_none());
    /// ```
    #[inline]
    pub fn estimate(&self) -> Option<f64> {
        self.hit_rate().map(|rate| 4.0 * rate)
    }

    /// The standard error of the estimate, 4 √(p̂(1-p̂)/n), where p̂ is the
    /// observed hit rate. `None` if the tally is empty.
    ///
    /// The in-circle indicator is a Bernoulli trial, so the estimate is a
    /// scaled sample mean and inherits its standard error.
    #[inline]
    pub fn std_err(&self) -> Option<f64> {
        self.hit_rate()
            .map(|rate| 4.0 * (rate * (1.0 - rate) / self.n as f64).sqrt())
    }
}

impl Default for HitTally {
    fn default() -> Self {
        HitTally::new()
    }
}

impl SuffStat<bool> for HitTally {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, hit: &bool) {
        self.n += 1;
        if *hit {
            self.hits += 1
        }
    }

    fn forget(&mut self, hit: &bool) {
        self.n -= 1;
        if *hit {
            self.hits -= 1
        }
    }
}
