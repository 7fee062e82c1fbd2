use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::json::{read_json, write_json};

/// Topology and initialization of a [`Network`](crate::network::Network).
///
/// A persisted weight stream can only be loaded back into a network built
/// from the same `input_size` and `hidden_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Length of every input vector (pixels of a 90×90 image).
    pub input_size: usize,
    pub hidden_size: usize,
    /// Initial weights are drawn uniformly from `[-weight_clamp, weight_clamp]`.
    pub weight_clamp: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            input_size: 8100,
            hidden_size: 60,
            weight_clamp: 0.5,
        }
    }
}

impl NetworkConfig {
    pub fn new(input_size: usize, hidden_size: usize) -> Self {
        NetworkConfig {
            input_size,
            hidden_size,
            ..NetworkConfig::default()
        }
    }

    /// Total number of weights: one vector per hidden neuron plus the output's.
    pub fn weight_count(&self) -> usize {
        self.hidden_size * self.input_size + self.hidden_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 || self.hidden_size == 0 {
            return Err(Error::InvalidConfig(format!(
                "layer sizes must be positive (input {}, hidden {})",
                self.input_size, self.hidden_size
            )));
        }
        if !self.weight_clamp.is_finite() || self.weight_clamp < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "weight clamp must be finite and non-negative, got {}",
                self.weight_clamp
            )));
        }
        Ok(())
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        write_json(path, self)
    }

    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig = read_json(path)?;
        config.validate()?;
        Ok(config)
    }
}
