pub mod classification;
pub mod config;
pub mod network;

pub use classification::Classification;
pub use config::NetworkConfig;
pub use network::Network;
