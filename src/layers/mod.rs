pub mod hidden;

pub use hidden::HiddenLayer;
