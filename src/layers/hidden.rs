use std::io::{Read, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::neuron::{BackwardSignal, HiddenNeuron, Neuron};
use crate::optim::Sgd;

/// Ordered hidden neurons sharing the input vector. Order fixes both the
/// layout of the output buffer and the persisted weight stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenLayer {
    neurons: Vec<HiddenNeuron>,
}

impl HiddenLayer {
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        clamp: f64,
        rng: &mut R,
    ) -> HiddenLayer {
        let neurons = (0..size)
            .map(|_| HiddenNeuron::new(input_size, clamp, rng))
            .collect();
        HiddenLayer { neurons }
    }

    pub fn from_weights(weights: Vec<Vec<f64>>) -> HiddenLayer {
        HiddenLayer {
            neurons: weights.into_iter().map(HiddenNeuron::from_weights).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[HiddenNeuron] {
        &self.neurons
    }

    /// Clears `outputs` and refills it with every neuron's output, in order.
    pub fn feed_from(&mut self, inputs: &[f64], outputs: &mut Vec<f64>) {
        outputs.clear();
        outputs.extend(self.neurons.iter_mut().map(|n| n.compute_output(inputs)));
    }

    /// Computes each neuron's gradient from `signal`, then steps its weights.
    pub fn backward(
        &mut self,
        inputs: &[f64],
        target: f64,
        signal: &BackwardSignal<'_>,
        optimizer: &Sgd,
    ) {
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            neuron.compute_gradient(target, signal, i);
            neuron.update_weights(inputs, optimizer);
        }
    }

    pub fn save_weights<W: Write>(&self, writer: &mut W) -> Result<()> {
        for neuron in &self.neurons {
            neuron.save_weights(writer)?;
        }
        Ok(())
    }

    pub fn load_weights<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        for neuron in &mut self.neurons {
            neuron.load_weights(reader)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn feed_from_rebuilds_buffer_in_order() {
        let mut layer = HiddenLayer::from_weights(vec![vec![0.0, 0.0], vec![1.0, -1.0]]);
        let mut outputs = vec![9.0; 5];
        layer.feed_from(&[2.0, 1.0], &mut outputs);
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0], 0.5);
        assert_eq!(outputs[1], crate::activation::sigmoid(1.0));
    }

    #[test]
    fn random_layer_has_requested_shape() {
        let layer = HiddenLayer::new(4, 9, 0.5, &mut StdRng::seed_from_u64(1));
        assert_eq!(layer.len(), 4);
        assert!(layer.neurons().iter().all(|n| n.fan_in() == 9));
    }
}
