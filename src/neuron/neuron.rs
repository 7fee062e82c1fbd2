use std::io::{Read, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::error::Result;
use crate::math::{dot, uniform_weights};
use crate::optim::Sgd;

/// Bytes per persisted weight (one big-endian `f64`).
pub const WEIGHT_BYTES: usize = 8;

/// Weights plus the values recomputed on every forward/backward pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronState {
    weights: Vec<f64>,
    #[serde(skip)]
    output: f64,
    #[serde(skip)]
    gradient: f64,
}

impl NeuronState {
    pub fn random<R: Rng + ?Sized>(fan_in: usize, clamp: f64, rng: &mut R) -> NeuronState {
        NeuronState::from_weights(uniform_weights(rng, fan_in, clamp))
    }

    pub fn from_weights(weights: Vec<f64>) -> NeuronState {
        NeuronState {
            weights,
            output: 0.0,
            gradient: 0.0,
        }
    }

    pub(crate) fn set_gradient(&mut self, gradient: f64) {
        self.gradient = gradient;
    }
}

/// Shared contract of hidden and output units. Implementors expose their
/// [`NeuronState`]; everything else is provided.
pub trait Neuron {
    fn state(&self) -> &NeuronState;
    fn state_mut(&mut self) -> &mut NeuronState;

    fn weights(&self) -> &[f64] {
        &self.state().weights
    }

    fn fan_in(&self) -> usize {
        self.state().weights.len()
    }

    /// Output of the most recent forward pass.
    fn output(&self) -> f64 {
        self.state().output
    }

    /// Error signal of the most recent backward pass.
    fn gradient(&self) -> f64 {
        self.state().gradient
    }

    /// `sigmoid(Σ weight[i] · input[i])`, stored and returned. No bias term.
    fn compute_output(&mut self, inputs: &[f64]) -> f64 {
        let state = self.state_mut();
        state.output = sigmoid(dot(&state.weights, inputs));
        state.output
    }

    /// `inputs` must be the slice used by the preceding forward pass.
    fn update_weights(&mut self, inputs: &[f64], optimizer: &Sgd) {
        let state = self.state_mut();
        optimizer.step(&mut state.weights, state.gradient, inputs);
    }

    /// Writes the weights in index order, one big-endian `f64` each.
    fn save_weights<W: Write>(&self, writer: &mut W) -> Result<()>
    where
        Self: Sized,
    {
        for weight in self.weights() {
            writer.write_all(&weight.to_be_bytes())?;
        }
        Ok(())
    }

    /// Reads exactly `fan_in()` weights. The neuron is left untouched if the
    /// stream runs short.
    fn load_weights<R: Read>(&mut self, reader: &mut R) -> Result<()>
    where
        Self: Sized,
    {
        let mut buf = vec![0u8; self.fan_in() * WEIGHT_BYTES];
        reader.read_exact(&mut buf)?;
        let weights: Vec<f64> = buf
            .chunks_exact(WEIGHT_BYTES)
            .map(|chunk| {
                let mut bytes = [0u8; WEIGHT_BYTES];
                bytes.copy_from_slice(chunk);
                f64::from_be_bytes(bytes)
            })
            .collect();
        self.state_mut().weights = weights;
        Ok(())
    }
}
