use serde::{Deserialize, Serialize};

/// Incremental mean and variance (Welford) without keeping the samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningStat {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStat {
    pub fn new() -> RunningStat {
        RunningStat::default()
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance, denominator `count - 1`.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_single_sample() {
        let mut stat = RunningStat::new();
        assert_eq!(stat.mean(), None);
        stat.push(0.8);
        assert_eq!(stat.mean(), Some(0.8));
        assert_eq!(stat.sample_std_dev(), None);
    }

    #[test]
    fn known_values() {
        let mut stat = RunningStat::new();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stat.push(x);
        }
        assert_eq!(stat.count(), 8);
        assert!((stat.mean().unwrap() - 5.0).abs() < 1e-12);
        assert!((stat.sample_variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn matches_two_pass_computation(values in proptest::collection::vec(0.0f64..1.0, 2..50)) {
            let mut stat = RunningStat::new();
            values.iter().for_each(|&v| stat.push(v));

            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

            prop_assert!((stat.mean().unwrap() - mean).abs() < 1e-9);
            prop_assert!((stat.sample_variance().unwrap() - variance).abs() < 1e-9);
        }
    }
}
