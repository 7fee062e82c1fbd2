use rand::Rng;

/// Weighted sum `Σ weights[i] * inputs[i]`. Both slices must have equal length.
pub fn dot(weights: &[f64], inputs: &[f64]) -> f64 {
    debug_assert_eq!(weights.len(), inputs.len());
    weights.iter().zip(inputs.iter()).map(|(w, x)| w * x).sum()
}

/// Draws `len` weights uniformly from `[-clamp, clamp]`.
pub fn uniform_weights<R: Rng + ?Sized>(rng: &mut R, len: usize, clamp: f64) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-clamp..=clamp)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[0.5, -1.0, 2.0], &[2.0, 3.0, 0.25]), -1.5);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn uniform_weights_respect_clamp() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = uniform_weights(&mut rng, 500, 0.5);
        assert_eq!(weights.len(), 500);
        assert!(weights.iter().all(|w| (-0.5..=0.5).contains(w)));
    }

    #[test]
    fn uniform_weights_are_seed_deterministic() {
        let a = uniform_weights(&mut StdRng::seed_from_u64(3), 16, 0.5);
        let b = uniform_weights(&mut StdRng::seed_from_u64(3), 16, 0.5);
        assert_eq!(a, b);
    }
}
