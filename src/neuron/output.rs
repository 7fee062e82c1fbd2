use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid_slope;
use crate::neuron::neuron::{Neuron, NeuronState};

/// The single sigmoid unit reading the hidden layer's outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputNeuron {
    state: NeuronState,
}

/// What a hidden neuron needs from the output neuron to compute its own
/// error signal.
///
/// It borrows the output neuron, so the output weights it exposes are the
/// pre-update ones: the output neuron cannot be updated while any signal is
/// alive.
#[derive(Debug, Clone, Copy)]
pub struct BackwardSignal<'a> {
    pub gradient: f64,
    weights: &'a [f64],
}

impl<'a> BackwardSignal<'a> {
    /// Weight connecting hidden neuron `index` to the output neuron.
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }
}

impl OutputNeuron {
    pub fn new<R: Rng + ?Sized>(hidden_size: usize, clamp: f64, rng: &mut R) -> OutputNeuron {
        OutputNeuron {
            state: NeuronState::random(hidden_size, clamp, rng),
        }
    }

    pub fn from_weights(weights: Vec<f64>) -> OutputNeuron {
        OutputNeuron {
            state: NeuronState::from_weights(weights),
        }
    }

    /// Delta rule for a sigmoid output: `(target - output) · output · (1 - output)`.
    pub fn compute_gradient(&mut self, target: f64) -> BackwardSignal<'_> {
        let output = self.output();
        let gradient = (target - output) * sigmoid_slope(output);
        self.state.set_gradient(gradient);
        BackwardSignal {
            gradient,
            weights: self.weights(),
        }
    }
}

impl Neuron for OutputNeuron {
    fn state(&self) -> &NeuronState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NeuronState {
        &mut self.state
    }
}
