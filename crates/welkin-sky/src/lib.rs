//! Per-frame sky assembly: turns a time and an observer into the uniform
//! parameter blocks a renderer uploads.
//!
//! A [`FrameContext`] is built once per frame from the astronomy crates;
//! each [`SkyLayer`] (sun, moon, stars, clouds) consumes it through the
//! shared `update`/`precompute` contract and exposes a `bytemuck::Pod`
//! uniform block. Expensive work (star catalogs, cloud density maps) lives
//! in `precompute` and runs once, not per frame.

pub mod clouds;
pub mod context;
pub mod layers;
pub mod stars;

pub use clouds::{CloudBakeConfig, bake_density_map};
pub use context::FrameContext;
pub use layers::{
    CloudLayer, CloudUniform, MoonLayer, MoonUniform, SkyLayer, StarLayer, StarUniform, SunLayer,
    SunUniform,
};
pub use stars::{StarPoint, generate_catalog};
