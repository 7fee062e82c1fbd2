pub mod vector;

pub use vector::{dot, uniform_weights};
