//! Deterministic noise synthesis for cloud and dither patterns.
//!
//! Two unrelated signals live here on purpose. [`NoiseGenerator`] is
//! coherent gradient noise — smooth, band-limited, suited to cloud density
//! fields. [`dither`] is a raw integer hash — spatially uncorrelated, one
//! evaluation per pixel, suited to breaking up banding. Both share the same
//! contract: identical inputs and seed give bit-identical outputs, across
//! calls and across process runs.

pub mod dither;
pub mod error;
pub mod perlin;

pub use dither::dither;
pub use error::NoiseError;
pub use perlin::NoiseGenerator;
