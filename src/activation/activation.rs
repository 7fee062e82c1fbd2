/// Pre-activations beyond this magnitude are clamped so the sigmoid never
/// rounds to exactly 0.0 or 1.0 in `f64`.
const MAX_PRE_ACTIVATION: f64 = 30.0;

/// Logistic sigmoid `1 / (1 + e^-x)`, strictly inside (0, 1) for any finite `x`.
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-MAX_PRE_ACTIVATION, MAX_PRE_ACTIVATION);
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative written in terms of the sigmoid's own output:
/// `σ'(x) = σ(x) · (1 - σ(x))`.
pub fn sigmoid_slope(output: f64) -> f64 {
    output * (1.0 - output)
}
