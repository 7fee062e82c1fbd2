pub mod activation;
pub mod config;
pub mod data;
pub mod error;
mod json;
pub mod layers;
pub mod math;
pub mod network;
pub mod neuron;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use config::Config;
pub use data::{FeatureSource, InputVector, LabeledSample};
pub use error::{Error, MalformedInput, Result};
pub use layers::HiddenLayer;
pub use network::{Classification, Network, NetworkConfig};
pub use neuron::{BackwardSignal, HiddenNeuron, Neuron, OutputNeuron};
pub use optim::Sgd;
pub use train::{
    evaluate, test_network, train_network, train_until, validate, RepetitionReport, RunningStat,
    TrainConfig, ValidationConfig,
};
