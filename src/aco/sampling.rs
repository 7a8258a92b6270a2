//! Weighted index sampling over a cumulative distribution.

use rand::Rng;

/// Cumulative sums of non-negative weights, sampled with one uniform draw.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeDistribution {
    cumulative: Vec<f64>,
    last_positive: usize,
}

impl CumulativeDistribution {
    /// Builds the distribution.
    ///
    /// Returns `None` if `weights` is empty, contains a negative or
    /// non-finite value, or sums to something that is not finite and
    /// positive.
    pub(crate) fn from_weights(weights: &[f64]) -> Option<Self> {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        let mut last_positive = None;
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return None;
            }
            if w > 0.0 {
                last_positive = Some(i);
            }
            total += w;
            cumulative.push(total);
        }
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        Some(Self {
            cumulative,
            last_positive: last_positive?,
        })
    }

    /// Sum of all weights.
    pub(crate) fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Normalized probability of each index.
    pub(crate) fn probabilities(&self) -> Vec<f64> {
        let total = self.total();
        let mut prev = 0.0;
        self.cumulative
            .iter()
            .map(|&c| {
                let p = (c - prev) / total;
                prev = c;
                p
            })
            .collect()
    }

    /// Draws an index with probability proportional to its weight.
    ///
    /// A uniform `u` in `[0, total)` selects the first index whose
    /// cumulative sum exceeds `u`; zero-weight indices are never chosen.
    pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let u = rng.random::<f64>() * self.total();
        let idx = self.cumulative.partition_point(|&c| c <= u);
        // u can round up to the total
        idx.min(self.last_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_invalid_weights() {
        assert!(CumulativeDistribution::from_weights(&[]).is_none());
        assert!(CumulativeDistribution::from_weights(&[0.0, 0.0]).is_none());
        assert!(CumulativeDistribution::from_weights(&[1.0, -0.5]).is_none());
        assert!(CumulativeDistribution::from_weights(&[1.0, f64::NAN]).is_none());
        assert!(CumulativeDistribution::from_weights(&[f64::INFINITY]).is_none());
        assert!(CumulativeDistribution::from_weights(&[f64::MAX, f64::MAX]).is_none());
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let dist = CumulativeDistribution::from_weights(&[1.0, 3.0, 0.0, 4.0]).expect("valid");
        let p = dist.probabilities();
        assert_eq!(p.len(), 4);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-10);
        assert!((p[1] - 0.375).abs() < 1e-10);
        assert_eq!(p[2], 0.0);
    }

    #[test]
    fn test_zero_weight_never_sampled() {
        let dist = CumulativeDistribution::from_weights(&[0.0, 2.0, 0.0, 1.0, 0.0]).expect("valid");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let i = dist.sample(&mut rng);
            assert!(i == 1 || i == 3, "sampled zero-weight index {i}");
        }
    }

    #[test]
    fn test_sample_frequencies() {
        let dist = CumulativeDistribution::from_weights(&[1.0, 3.0]).expect("valid");
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 20_000;
        let ones = (0..draws).filter(|_| dist.sample(&mut rng) == 1).count();
        let freq = ones as f64 / draws as f64;
        assert!((freq - 0.75).abs() < 0.03, "frequency {freq}");
    }

    #[test]
    fn test_single_candidate() {
        let dist = CumulativeDistribution::from_weights(&[0.25]).expect("valid");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(dist.sample(&mut rng), 0);
        assert!((dist.total() - 0.25).abs() < 1e-10);
    }
}
