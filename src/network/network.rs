use std::io::{Read, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::InputVector;
use crate::error::{Error, MalformedInput, Result};
use crate::json::{read_json, write_json};
use crate::layers::HiddenLayer;
use crate::network::classification::Classification;
use crate::network::config::NetworkConfig;
use crate::neuron::{Neuron, OutputNeuron, WEIGHT_BYTES};
use crate::optim::Sgd;

/// One hidden sigmoid layer feeding a single sigmoid output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    config: NetworkConfig,
    hidden: HiddenLayer,
    output: OutputNeuron,
    /// Hidden outputs of the current sample, rebuilt on every forward pass.
    #[serde(skip)]
    hidden_outputs: Vec<f64>,
    /// Input of the forward pass that `hidden_outputs` belongs to. Cleared
    /// whenever the weights change.
    #[serde(skip)]
    forward_input: Option<InputVector>,
}

impl Network {
    /// Builds a network with uniformly random weights drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;
        let hidden = HiddenLayer::new(
            config.hidden_size,
            config.input_size,
            config.weight_clamp,
            rng,
        );
        let output = OutputNeuron::new(config.hidden_size, config.weight_clamp, rng);
        Ok(Network::assemble(config, hidden, output))
    }

    /// Builds a network from explicit weights, one vector per hidden neuron
    /// followed by the output neuron's vector.
    pub fn from_weights(
        config: &NetworkConfig,
        hidden: Vec<Vec<f64>>,
        output: Vec<f64>,
    ) -> Result<Network> {
        config.validate()?;
        let network = Network::assemble(
            config,
            HiddenLayer::from_weights(hidden),
            OutputNeuron::from_weights(output),
        );
        network.check_topology()?;
        Ok(network)
    }

    fn assemble(config: &NetworkConfig, hidden: HiddenLayer, output: OutputNeuron) -> Network {
        Network {
            config: config.clone(),
            hidden,
            output,
            hidden_outputs: Vec::with_capacity(config.hidden_size),
            forward_input: None,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn hidden_layer(&self) -> &HiddenLayer {
        &self.hidden
    }

    pub fn output_neuron(&self) -> &OutputNeuron {
        &self.output
    }

    pub fn weight_count(&self) -> usize {
        self.config.weight_count()
    }

    /// Forward pass: every hidden neuron in order, then the output neuron.
    pub fn compute_output(&mut self, input: &InputVector) -> Result<f64> {
        self.check_input(input)?;
        self.hidden.feed_from(input.as_slice(), &mut self.hidden_outputs);
        let output = self.output.compute_output(&self.hidden_outputs);
        self.forward_input = Some(input.clone());
        Ok(output)
    }

    /// Output neuron value from the most recent forward pass.
    pub fn output(&self) -> f64 {
        self.output.output()
    }

    pub fn classify(&self) -> Classification {
        Classification::from_output(self.output())
    }

    /// Backward pass toward `target` for the sample last passed to
    /// [`compute_output`](Self::compute_output).
    ///
    /// The output gradient is computed first; each hidden neuron then reads
    /// the output neuron's pre-update weight and steps its own weights; the
    /// output neuron is updated last, against the forward-pass hidden outputs.
    ///
    /// Fails with [`Error::MissingForwardPass`] unless a forward pass has run
    /// since the last weight change, and with [`Error::ForwardPassMismatch`]
    /// when `input` is not the input of that pass. Weights are untouched on
    /// failure.
    pub fn update_weights(
        &mut self,
        input: &InputVector,
        target: f64,
        optimizer: &Sgd,
    ) -> Result<()> {
        match &self.forward_input {
            None => return Err(Error::MissingForwardPass),
            Some(forward) if forward != input => return Err(Error::ForwardPassMismatch),
            Some(_) => {}
        }

        let signal = self.output.compute_gradient(target);
        self.hidden.backward(input.as_slice(), target, &signal, optimizer);
        self.output.update_weights(&self.hidden_outputs, optimizer);
        self.forward_input = None;
        Ok(())
    }

    /// Forward pass, classification and backward pass over one sample.
    /// Returns the classification made before the weights moved.
    pub fn train_step(
        &mut self,
        input: &InputVector,
        target: f64,
        optimizer: &Sgd,
    ) -> Result<Classification> {
        self.compute_output(input)?;
        let classification = self.classify();
        self.update_weights(input, target, optimizer)?;
        Ok(classification)
    }

    /// Writes every hidden neuron's weights in layer order, then the output
    /// neuron's. No header: the reader must know the topology.
    pub fn save_weights<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.hidden.save_weights(writer)?;
        self.output.save_weights(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a stream written by [`save_weights`](Self::save_weights).
    ///
    /// The whole stream is read and its size checked against the configured
    /// topology before any weight is replaced.
    pub fn load_weights<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        let expected_bytes = self.weight_count() * WEIGHT_BYTES;
        let mut bytes = Vec::with_capacity(expected_bytes);
        reader.read_to_end(&mut bytes)?;
        if bytes.len() != expected_bytes {
            return Err(Error::TopologyMismatch {
                expected_bytes,
                found_bytes: bytes.len(),
            });
        }

        let mut cursor = bytes.as_slice();
        self.hidden.load_weights(&mut cursor)?;
        self.output.load_weights(&mut cursor)?;
        self.forward_input = None;
        Ok(())
    }

    /// Serializes configuration and weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        write_json(path, self)
    }

    /// Deserializes a network previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let network: Network = read_json(path)?;
        network.config.validate()?;
        network.check_topology()?;
        Ok(network)
    }

    fn check_input(&self, input: &InputVector) -> Result<()> {
        if input.len() != self.config.input_size {
            return Err(MalformedInput::WrongLength {
                expected: self.config.input_size,
                found: input.len(),
            }
            .into());
        }
        Ok(())
    }

    fn check_topology(&self) -> Result<()> {
        let config = &self.config;
        if self.hidden.len() != config.hidden_size {
            return Err(Error::InvalidConfig(format!(
                "{} hidden neurons given, topology has {}",
                self.hidden.len(),
                config.hidden_size
            )));
        }
        if let Some((i, neuron)) = self
            .hidden
            .neurons()
            .iter()
            .enumerate()
            .find(|(_, n)| n.fan_in() != config.input_size)
        {
            return Err(Error::InvalidConfig(format!(
                "hidden neuron {i} has {} weights, input size is {}",
                neuron.fan_in(),
                config.input_size
            )));
        }
        if self.output.fan_in() != config.hidden_size {
            return Err(Error::InvalidConfig(format!(
                "output neuron has {} weights, hidden size is {}",
                self.output.fan_in(),
                config.hidden_size
            )));
        }
        Ok(())
    }
}
