pub mod neuron;
pub mod hidden;
pub mod output;

pub use neuron::{Neuron, NeuronState, WEIGHT_BYTES};
pub use hidden::HiddenNeuron;
pub use output::{BackwardSignal, OutputNeuron};
