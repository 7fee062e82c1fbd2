pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online update, `weight[i] += lr · gradient · input[i]`.
    ///
    /// The gradient carries the sign that moves the output toward the target,
    /// so the step is added rather than subtracted.
    pub fn step(&self, weights: &mut [f64], gradient: f64, inputs: &[f64]) {
        debug_assert_eq!(weights.len(), inputs.len());
        let scale = self.learning_rate * gradient;
        for (w, x) in weights.iter_mut().zip(inputs.iter()) {
            *w += scale * x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_along_inputs() {
        let mut weights = vec![0.0, 1.0, -1.0];
        Sgd::new(0.5).step(&mut weights, 2.0, &[1.0, 0.0, -2.0]);
        assert_eq!(weights, vec![1.0, 1.0, -3.0]);
    }

    #[test]
    fn zero_gradient_leaves_weights() {
        let mut weights = vec![0.25, -0.25];
        Sgd::new(0.3).step(&mut weights, 0.0, &[10.0, 10.0]);
        assert_eq!(weights, vec![0.25, -0.25]);
    }
}
