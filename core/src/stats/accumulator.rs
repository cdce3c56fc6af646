//! Monte Carlo Accumulator

use crate::math::*;

/// Running statistics of Monte Carlo estimator values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonteCarloAccumulator {
    /// Sum of all values.
    sum: Float,

    /// Sum of the squares of all values.
    sum_sq: Float,

    /// Count of all values.
    count: u64,

    /// Minimum value.
    min: Option<Float>,

    /// Maximum value.
    max: Option<Float>,
}

impl MonteCarloAccumulator {
    /// Report a sample value.
    ///
    /// * `val` - Sample value.
    pub fn add(&mut self, val: Float) {
        self.sum += val;
        self.sum_sq += val * val;
        self.count += 1;

        if let Some(v) = self.min.as_mut() {
            *v = min(*v, val);
        } else {
            self.min = Some(val);
        }

        if let Some(v) = self.max.as_mut() {
            *v = max(*v, val);
        } else {
            self.max = Some(val);
        }
    }

    /// Accumulate the values reported to another accumulator.
    ///
    /// * `other` - The other accumulator.
    pub fn merge(&mut self, other: &Self) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;

        if let Some(v) = self.min.as_mut() {
            if let Some(m) = other.min {
                *v = min(*v, m);
            }
        } else {
            self.min = other.min;
        }

        if let Some(v) = self.max.as_mut() {
            if let Some(m) = other.max {
                *v = max(*v, m);
            }
        } else {
            self.max = other.max;
        }
    }

    /// Returns the number of values reported.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the sum of all values.
    pub fn sum(&self) -> Float {
        self.sum
    }

    /// Returns the minimum value or `None` if nothing was reported.
    pub fn min(&self) -> Option<Float> {
        self.min
    }

    /// Returns the maximum value or `None` if nothing was reported.
    pub fn max(&self) -> Option<Float> {
        self.max
    }

    /// Returns the sample mean; 0 when empty.
    pub fn mean(&self) -> Float {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as Float
        }
    }

    /// Returns the unbiased sample variance; 0 for fewer than two values.
    pub fn variance(&self) -> Float {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as Float;
        max(0.0, (self.sum_sq - self.sum * self.sum / n) / (n - 1.0))
    }

    /// Returns the standard error of the mean.
    pub fn std_error(&self) -> Float {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as Float).sqrt()
        }
    }
}

impl Extend<Float> for MonteCarloAccumulator {
    fn extend<I: IntoIterator<Item = Float>>(&mut self, iter: I) {
        for val in iter {
            self.add(val);
        }
    }
}

impl FromIterator<Float> for MonteCarloAccumulator {
    fn from_iter<I: IntoIterator<Item = Float>>(iter: I) -> Self {
        let mut acc = Self::default();
        acc.extend(iter);
        acc
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn empty() {
        let acc = MonteCarloAccumulator::default();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), 0.0);
        assert_eq!(acc.variance(), 0.0);
        assert_eq!(acc.std_error(), 0.0);
        assert!(acc.min().is_none());
        assert!(acc.max().is_none());
    }

    #[test]
    fn known_values() {
        let acc: MonteCarloAccumulator = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_eq!(acc.count(), 8);
        assert!(approx_eq!(f64, acc.mean(), 5.0, ulps = 2));
        assert!(approx_eq!(f64, acc.variance(), 32.0 / 7.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, acc.std_error(), (32.0 / 7.0 / 8.0 as f64).sqrt(), epsilon = 1e-12));
        assert_eq!(acc.min(), Some(2.0));
        assert_eq!(acc.max(), Some(9.0));
    }

    #[test]
    fn merge_into_empty() {
        let mut acc = MonteCarloAccumulator::default();
        let other: MonteCarloAccumulator = [1.0, -3.0].into_iter().collect();
        acc.merge(&other);
        assert_eq!(acc, other);
    }

    proptest! {
        #[test]
        fn merge_matches_sequential(
            a in prop::collection::vec(-10.0..10.0f64, 0..50),
            b in prop::collection::vec(-10.0..10.0f64, 0..50),
        ) {
            let mut merged: MonteCarloAccumulator = a.iter().copied().collect();
            merged.merge(&b.iter().copied().collect());

            let sequential: MonteCarloAccumulator = a.iter().chain(b.iter()).copied().collect();

            prop_assert_eq!(merged.count(), sequential.count());
            prop_assert!((merged.mean() - sequential.mean()).abs() < 1e-9);
            prop_assert!((merged.variance() - sequential.variance()).abs() < 1e-9);
            prop_assert_eq!(merged.min(), sequential.min());
            prop_assert_eq!(merged.max(), sequential.max());
        }
    }
}
