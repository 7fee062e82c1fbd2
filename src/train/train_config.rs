use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::optim::Sgd;

/// Hyperparameters for online training.
///
/// Targets are soft (inside (0, 1)) so the output sigmoid is never pushed
/// toward saturation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    /// Target output for samples labelled `true`.
    pub positive_target: f64,
    /// Target output for samples labelled `false`.
    pub negative_target: f64,
    /// Training accuracy at which [`train_until`](crate::train::train_until) stops.
    pub target_accuracy: f64,
    pub max_epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.3,
            positive_target: 0.9,
            negative_target: 0.1,
            target_accuracy: 0.95,
            max_epochs: 100,
        }
    }
}

impl TrainConfig {
    pub fn target_for(&self, label: bool) -> f64 {
        if label {
            self.positive_target
        } else {
            self.negative_target
        }
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::new(self.learning_rate)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        let targets = [
            ("positive", self.positive_target),
            ("negative", self.negative_target),
        ];
        for (name, target) in targets {
            if !(target > 0.0 && target < 1.0) {
                return Err(Error::InvalidConfig(format!(
                    "{name} target must lie strictly inside (0, 1), got {target}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.target_accuracy) {
            return Err(Error::InvalidConfig(format!(
                "target accuracy must lie in [0, 1], got {}",
                self.target_accuracy
            )));
        }
        Ok(())
    }
}

/// Shape of repeated k-fold cross-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub repetitions: usize,
    pub folds: usize,
    /// Start every fold from fresh random weights instead of continuing to
    /// train the same network.
    pub reinitialize_per_fold: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            repetitions: 10,
            folds: 5,
            reinitialize_per_fold: false,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.folds < 2 {
            return Err(Error::InvalidConfig(format!("need at least 2 folds, got {}", self.folds)));
        }
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig("need at least 1 repetition".to_string()));
        }
        Ok(())
    }
}
