use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid_slope;
use crate::neuron::neuron::{Neuron, NeuronState};
use crate::neuron::output::BackwardSignal;

/// A sigmoid unit reading the raw input vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenNeuron {
    state: NeuronState,
}

impl HiddenNeuron {
    pub fn new<R: Rng + ?Sized>(input_size: usize, clamp: f64, rng: &mut R) -> HiddenNeuron {
        HiddenNeuron {
            state: NeuronState::random(input_size, clamp, rng),
        }
    }

    pub fn from_weights(weights: Vec<f64>) -> HiddenNeuron {
        HiddenNeuron {
            state: NeuronState::from_weights(weights),
        }
    }

    /// Backpropagates the single output's error through weight `index`:
    /// `downstream gradient · downstream weight · output · (1 - output)`.
    ///
    /// With one output unit the target plays no part here.
    pub fn compute_gradient(
        &mut self,
        _target: f64,
        signal: &BackwardSignal<'_>,
        index: usize,
    ) -> f64 {
        let gradient = signal.gradient * signal.weight(index) * sigmoid_slope(self.output());
        self.state.set_gradient(gradient);
        gradient
    }
}

impl Neuron for HiddenNeuron {
    fn state(&self) -> &NeuronState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NeuronState {
        &mut self.state
    }
}
