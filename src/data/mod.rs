pub mod input;
pub mod sample;

pub use input::{FeatureSource, InputVector};
pub use sample::LabeledSample;
