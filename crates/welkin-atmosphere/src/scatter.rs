//! Scattering math: phase functions, Earth-like parameters, the GPU
//! uniform block, and a CPU reference integrator.
//!
//! The GPU shader implements the same single-scattering algorithm as
//! [`transmitted_radiance`]; the CPU path exists so tests can pin the
//! behavior of the constants the uniform block carries.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

/// Physical parameters of the scattering medium.
#[derive(Clone, Debug)]
pub struct ScatteringParams {
    /// Planet surface radius in meters.
    pub planet_radius: f32,
    /// Top of the scattering shell in meters.
    pub atmosphere_radius: f32,
    /// Rayleigh scattering coefficients at sea level (RGB, per meter).
    pub rayleigh_coefficients: [f32; 3],
    /// Rayleigh scale height in meters.
    pub rayleigh_scale_height: f32,
    /// Mie scattering coefficient at sea level (per meter).
    pub mie_coefficient: f32,
    /// Mie scale height in meters.
    pub mie_scale_height: f32,
    /// Henyey-Greenstein anisotropy parameter g.
    pub mie_anisotropy: f32,
    /// Sun intensity multiplier.
    pub sun_intensity: f32,
}

impl ScatteringParams {
    /// Earth parameters, with radius and Rayleigh scale height taken from
    /// the Earth model so the shader and the astronomy agree.
    pub fn earth() -> Self {
        let planet_radius = (welkin_astro::mean_radius() * 1_000.0) as f32;
        Self {
            planet_radius,
            atmosphere_radius: planet_radius * 1.025,
            rayleigh_coefficients: [5.5e-6, 13.0e-6, 22.4e-6],
            rayleigh_scale_height: welkin_astro::atmosphere_thickness() as f32,
            mie_coefficient: 21e-6,
            mie_scale_height: 1_200.0,
            mie_anisotropy: 0.758,
            sun_intensity: 22.0,
        }
    }
}

/// Rayleigh phase function for a scattering angle cosine.
pub fn rayleigh_phase(cos_angle: f32) -> f32 {
    3.0 / (16.0 * PI) * (1.0 + cos_angle * cos_angle)
}

/// Henyey-Greenstein Mie phase function.
pub fn mie_phase(cos_angle: f32, g: f32) -> f32 {
    let g2 = g * g;
    let numerator = 3.0 * (1.0 - g2) * (1.0 + cos_angle * cos_angle);
    let denominator = 8.0 * PI * (2.0 + g2) * (1.0 + g2 - 2.0 * g * cos_angle).powf(1.5);
    numerator / denominator
}

/// Internal ray-sphere helper on render-precision floats; `(t_near, t_far)`
/// or `None` on a miss. The public, policy-carrying entry point is
/// [`crate::geometry::ray_shell_intersection`].
fn sphere_hits(origin: Vec3, dir: Vec3, radius: f32) -> Option<(f32, f32)> {
    let b = origin.dot(dir);
    let c = origin.dot(origin) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some((-b - sqrt_disc, -b + sqrt_disc))
}

/// Single-scattered sky radiance along one view ray, linear RGB.
///
/// Marches `view_samples` points along the ray inside the shell, each with a
/// `light_samples` march toward the sun for the transmittance. Returns black
/// for rays that never enter the shell.
pub fn transmitted_radiance(
    observer: Vec3,
    view_dir: Vec3,
    sun_dir: Vec3,
    params: &ScatteringParams,
    view_samples: u32,
    light_samples: u32,
) -> [f32; 3] {
    let Some((t_near, t_far)) = sphere_hits(observer, view_dir, params.atmosphere_radius) else {
        return [0.0; 3];
    };
    if t_far < 0.0 {
        return [0.0; 3];
    }

    // Stop at the ground if the ray hits it.
    let t_start = t_near.max(0.0);
    let t_end = match sphere_hits(observer, view_dir, params.planet_radius) {
        Some((ground_near, _)) if ground_near > 0.0 => t_far.min(ground_near),
        _ => t_far,
    };
    if t_end <= t_start {
        return [0.0; 3];
    }

    let step = (t_end - t_start) / view_samples as f32;
    let cos_angle = view_dir.dot(sun_dir);
    let phase_r = rayleigh_phase(cos_angle);
    let phase_m = mie_phase(cos_angle, params.mie_anisotropy);
    let beta_r = Vec3::from(params.rayleigh_coefficients);

    let mut sum_rayleigh = Vec3::ZERO;
    let mut sum_mie = Vec3::ZERO;
    let mut depth_r = 0.0_f32;
    let mut depth_m = 0.0_f32;

    for i in 0..view_samples {
        let t = t_start + (i as f32 + 0.5) * step;
        let sample = observer + view_dir * t;
        let height = sample.length() - params.planet_radius;

        let density_r = (-height / params.rayleigh_scale_height).exp() * step;
        let density_m = (-height / params.mie_scale_height).exp() * step;
        depth_r += density_r;
        depth_m += density_m;

        let Some((_, light_far)) = sphere_hits(sample, sun_dir, params.atmosphere_radius) else {
            continue;
        };
        let light_step = light_far / light_samples as f32;
        let mut light_depth_r = 0.0_f32;
        let mut light_depth_m = 0.0_f32;
        for j in 0..light_samples {
            let lt = (j as f32 + 0.5) * light_step;
            let light_height = (sample + sun_dir * lt).length() - params.planet_radius;
            light_depth_r += (-light_height / params.rayleigh_scale_height).exp() * light_step;
            light_depth_m += (-light_height / params.mie_scale_height).exp() * light_step;
        }

        let tau = beta_r * (depth_r + light_depth_r)
            + Vec3::splat(params.mie_coefficient) * (depth_m + light_depth_m);
        let attenuation = Vec3::new((-tau.x).exp(), (-tau.y).exp(), (-tau.z).exp());

        sum_rayleigh += attenuation * density_r;
        sum_mie += attenuation * density_m;
    }

    let radiance = params.sun_intensity
        * (phase_r * beta_r * sum_rayleigh
            + phase_m * params.mie_coefficient * sum_mie);
    radiance.to_array()
}

/// Per-frame scattering uniform block, WGSL std140-compatible.
///
/// `vec3<f32>` fields need 16-byte alignment, hence the explicit padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct AtmosphereUniform {
    /// Rayleigh scattering coefficients (RGB). (offset 0)
    pub rayleigh_coefficients: [f32; 3],
    /// Rayleigh scale height in meters. (offset 12)
    pub rayleigh_scale_height: f32,
    /// Planet surface radius in meters. (offset 16)
    pub planet_radius: f32,
    /// Atmosphere shell radius in meters. (offset 20)
    pub atmosphere_radius: f32,
    /// Mie scattering coefficient. (offset 24)
    pub mie_coefficient: f32,
    /// Mie scale height in meters. (offset 28)
    pub mie_scale_height: f32,
    /// Normalized sun direction, horizontal frame. (offset 32)
    pub sun_direction: [f32; 3],
    /// Mie anisotropy g. (offset 44)
    pub mie_anisotropy: f32,
    /// Sun intensity multiplier. (offset 48)
    pub sun_intensity: f32,
    /// Padding to a 16-byte multiple. (offset 52)
    pub _padding: [f32; 3],
}

impl AtmosphereUniform {
    /// Pack parameters and the frame's sun direction into the GPU layout.
    pub fn pack(params: &ScatteringParams, sun_direction: Vec3) -> Self {
        Self {
            rayleigh_coefficients: params.rayleigh_coefficients,
            rayleigh_scale_height: params.rayleigh_scale_height,
            planet_radius: params.planet_radius,
            atmosphere_radius: params.atmosphere_radius,
            mie_coefficient: params.mie_coefficient,
            mie_scale_height: params.mie_scale_height,
            sun_direction: sun_direction.normalize().to_array(),
            mie_anisotropy: params.mie_anisotropy,
            sun_intensity: params.sun_intensity,
            _padding: [0.0; 3],
        }
    }
}
