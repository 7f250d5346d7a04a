//! Configuration for the sky toolkit: observer location, simulated time,
//! star and cloud layer setup, persisted as RON.

pub mod config;
pub mod error;

pub use config::{
    CloudLayerConfig, DebugConfig, DitherConfig, ObserverConfig, SkyConfig, StarConfig, TimeConfig,
};
pub use error::ConfigError;
