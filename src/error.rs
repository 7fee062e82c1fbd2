use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a feature file can fail to describe an input vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("token {token:?} at position {position} is not an integer")]
    InvalidToken { position: usize, token: String },

    #[error("expected {expected} values, found {found}")]
    WrongLength { expected: usize, found: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// The weight stream does not hold exactly one value per weight of the
    /// configured topology. Nothing has been applied to the network.
    #[error("weight stream holds {found_bytes} bytes, topology needs {expected_bytes}")]
    TopologyMismatch { expected_bytes: usize, found_bytes: usize },

    /// `update_weights` was called with no forward pass since the last
    /// weight change.
    #[error("backward pass requested without a preceding forward pass")]
    MissingForwardPass,

    /// `update_weights` was given a different input than the forward pass.
    #[error("backward pass input differs from the forward pass input")]
    ForwardPassMismatch,

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("need at least {needed} samples, got {found}")]
    InsufficientSamples { needed: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
