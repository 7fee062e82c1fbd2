use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json::{read_json, write_json};
use crate::network::NetworkConfig;
use crate::train::{TrainConfig, ValidationConfig};

/// Everything a run needs, as stored in a JSON config file. Missing
/// sections and fields take their reference defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub train: TrainConfig,
    pub validation: ValidationConfig,
    /// Seeds weight initialization and shuffling; entropy when absent.
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.train.validate()?;
        self.validation.validate()
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        write_json(path, self)
    }

    pub fn load_json(path: &str) -> Result<Config> {
        let config: Config = read_json(path)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "network": { "hidden_size": 10 }, "validation": { "folds": 4 }, "seed": 42 }"#,
        )
        .unwrap();
        assert_eq!(config.network.hidden_size, 10);
        assert_eq!(config.network.input_size, 8100);
        assert_eq!(config.train, TrainConfig::default());
        assert_eq!(config.validation.folds, 4);
        assert_eq!(config.validation.repetitions, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn file_round_trip_and_validation() {
        let path = std::env::temp_dir().join("ferrite_gender_config_test.json");
        let path = path.to_str().unwrap();

        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        config.save_json(path).unwrap();
        assert_eq!(Config::load_json(path).unwrap(), config);

        std::fs::write(path, r#"{ "train": { "learning_rate": -1.0 } }"#).unwrap();
        assert!(matches!(Config::load_json(path), Err(Error::InvalidConfig(_))));
        std::fs::remove_file(path).ok();
    }
}
