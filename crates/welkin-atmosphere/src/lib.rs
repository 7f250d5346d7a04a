//! Atmospheric scattering and shell geometry support.
//!
//! The scalar constants come from the `welkin-astro` Earth model; this
//! crate turns them into per-ray geometry (shell intersections, path
//! lengths), scattering math (phase functions, a CPU reference
//! integrator), and the uniform block a renderer uploads. Geometry that
//! has no valid answer is an error, never a NaN or sentinel float — the
//! caller decides to skip the fragment.

pub mod error;
pub mod geometry;
pub mod scatter;

pub use error::AtmosphereError;
pub use geometry::{CloudLayerParams, ray_shell_intersection};
pub use scatter::{
    AtmosphereUniform, ScatteringParams, mie_phase, rayleigh_phase, transmitted_radiance,
};
