//! Sky layer implementations behind the shared update/precompute contract.
//!
//! Each celestial layer variant owns its uniform block and refreshes it
//! from the [`FrameContext`]; the renderer iterates `dyn SkyLayer` without
//! knowing which body it is talking to.

use bytemuck::{Pod, Zeroable};

use welkin_atmosphere::CloudLayerParams;
use welkin_noise::NoiseGenerator;
use welkin_time::JulianDay;

use crate::clouds::{CloudBakeConfig, bake_density_map};
use crate::context::FrameContext;
use crate::stars::{StarPoint, generate_catalog};

/// Shared capability interface of every sky layer.
pub trait SkyLayer {
    /// Refresh per-frame state from the context. Cheap; called every frame.
    fn update(&mut self, ctx: &FrameContext);

    /// One-time expensive setup (catalogs, texture baking). Called before
    /// the first `update`.
    fn precompute(&mut self);
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Daylight intensity from the sine of the sun's altitude: full above 15°,
/// zero below −10°, smooth through dawn and dusk.
fn sun_intensity_curve(sin_altitude: f32) -> f32 {
    let low = (-10.0_f32).to_radians().sin();
    let high = (15.0_f32).to_radians().sin();
    smoothstep(low, high, sin_altitude)
}

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Sun uniform block (two 16-byte rows).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct SunUniform {
    /// Apparent direction, horizontal frame. (offset 0)
    pub direction: [f32; 3],
    /// Disk diameter in radians. (offset 12)
    pub angular_diameter: f32,
    /// Linear RGB disk color, warm near the horizon. (offset 16)
    pub color: [f32; 3],
    /// Daylight intensity `[0, 1]`. (offset 28)
    pub intensity: f32,
}

/// The solar disk layer.
#[derive(Clone, Debug, Default)]
pub struct SunLayer {
    uniform: SunUniform,
}

impl SunLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current uniform block.
    pub fn uniform(&self) -> &SunUniform {
        &self.uniform
    }
}

impl SkyLayer for SunLayer {
    fn update(&mut self, ctx: &FrameContext) {
        let direction = ctx.sun.direction();
        let intensity = sun_intensity_curve(direction.y);

        // Warm white high up, deep orange at the horizon.
        let warmth = smoothstep(0.0, 0.5, direction.y);
        let color = [
            1.0,
            lerp(0.6, 0.98, warmth),
            lerp(0.3, 0.92, warmth),
        ];

        self.uniform = SunUniform {
            direction: direction.to_array(),
            angular_diameter: ctx.sun_angular_diameter as f32,
            color,
            intensity,
        };
    }

    fn precompute(&mut self) {}
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Moon uniform block (two 16-byte rows).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct MoonUniform {
    /// Apparent direction, horizontal frame. (offset 0)
    pub direction: [f32; 3],
    /// Disk diameter in radians. (offset 12)
    pub angular_diameter: f32,
    /// Illuminated fraction `[0, 1]`. (offset 16)
    pub phase_fraction: f32,
    /// Earthshine level on the dark limb. (offset 20)
    pub earthshine: f32,
    /// Padding. (offset 24)
    pub _padding: [f32; 2],
}

/// The lunar disk layer.
#[derive(Clone, Debug, Default)]
pub struct MoonLayer {
    uniform: MoonUniform,
}

impl MoonLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current uniform block.
    pub fn uniform(&self) -> &MoonUniform {
        &self.uniform
    }
}

impl SkyLayer for MoonLayer {
    fn update(&mut self, ctx: &FrameContext) {
        let fraction = ctx.moon_illuminated_fraction as f32;
        self.uniform = MoonUniform {
            direction: ctx.moon.direction().to_array(),
            angular_diameter: ctx.moon_angular_diameter as f32,
            phase_fraction: fraction,
            // Earthshine is strongest when the sunlit Earth faces the
            // moon's dark side, i.e. around new moon.
            earthshine: 0.02 * (1.0 - fraction),
            _padding: [0.0; 2],
        };
    }

    fn precompute(&mut self) {}
}

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

/// Starfield uniform block (one 16-byte row).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct StarUniform {
    /// Overall starfield opacity `[0, 1]`; zero in daylight. (offset 0)
    pub visibility: f32,
    /// Faintest magnitude the catalog carries. (offset 4)
    pub magnitude_limit: f32,
    /// Brightness multiplier applied in the shader. (offset 8)
    pub brightness_scale: f32,
    /// Padding. (offset 12)
    pub _padding: f32,
}

/// The procedural starfield layer.
#[derive(Clone, Debug)]
pub struct StarLayer {
    seed: u64,
    candidate_count: u32,
    catalog: Vec<StarPoint>,
    uniform: StarUniform,
}

impl StarLayer {
    pub fn new(seed: u64, candidate_count: u32) -> Self {
        Self {
            seed,
            candidate_count,
            catalog: Vec::new(),
            uniform: StarUniform::default(),
        }
    }

    /// The catalog baked by `precompute`; empty before it runs.
    pub fn catalog(&self) -> &[StarPoint] {
        &self.catalog
    }

    /// Current uniform block.
    pub fn uniform(&self) -> &StarUniform {
        &self.uniform
    }
}

impl SkyLayer for StarLayer {
    fn update(&mut self, ctx: &FrameContext) {
        let sun_up = sun_intensity_curve(ctx.sun.direction().y);
        self.uniform = StarUniform {
            visibility: (1.0 - sun_up * 2.0).clamp(0.0, 1.0),
            magnitude_limit: ctx.magnitude_limit as f32,
            brightness_scale: 1.0,
            _padding: 0.0,
        };
    }

    fn precompute(&mut self) {
        let limit = welkin_astro::apparent_magnitude_limit() as f32;
        self.catalog = generate_catalog(self.seed, self.candidate_count, limit);
    }
}

// ---------------------------------------------------------------------------
// Clouds
// ---------------------------------------------------------------------------

/// Cloud layer uniform block (two 16-byte rows).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct CloudUniform {
    /// Layer altitude above the surface in meters. (offset 0)
    pub altitude_m: f32,
    /// Sky-cover fraction `[0, 1]`. (offset 4)
    pub coverage: f32,
    /// Density-edge sharpness exponent. (offset 8)
    pub sharpness: f32,
    /// Sunlight intensity on the layer. (offset 12)
    pub sun_intensity: f32,
    /// Wind scroll offset in meters. (offset 16)
    pub wind_offset_m: [f32; 2],
    /// Padding. (offset 24)
    pub _padding: [f32; 2],
}

/// A screen-aligned cloud layer with a pre-baked density texture.
#[derive(Clone, Debug)]
pub struct CloudLayer {
    params: CloudLayerParams,
    bake: CloudBakeConfig,
    generator: NoiseGenerator,
    /// Wind velocity over ground in meters per second.
    wind_velocity: glam::DVec2,
    density: Vec<f32>,
    last_update: Option<JulianDay>,
    uniform: CloudUniform,
}

impl CloudLayer {
    pub fn new(params: CloudLayerParams, bake: CloudBakeConfig, seed: u64) -> Self {
        Self {
            params,
            bake,
            generator: NoiseGenerator::new(seed),
            wind_velocity: glam::DVec2::new(12.0, 3.0),
            density: Vec::new(),
            last_update: None,
            uniform: CloudUniform::default(),
        }
    }

    /// Set the wind velocity in meters per second over ground.
    pub fn set_wind_velocity(&mut self, velocity: glam::DVec2) {
        self.wind_velocity = velocity;
    }

    /// The baked density map; empty before `precompute`.
    pub fn density_map(&self) -> &[f32] {
        &self.density
    }

    /// Geometric layer parameters (for ray intersection queries).
    pub fn params(&self) -> &CloudLayerParams {
        &self.params
    }

    /// Current uniform block.
    pub fn uniform(&self) -> &CloudUniform {
        &self.uniform
    }
}

impl SkyLayer for CloudLayer {
    fn update(&mut self, ctx: &FrameContext) {
        if let Some(last) = self.last_update {
            let dt_seconds = (ctx.julian_day.0 - last.0) * 86_400.0;
            self.params.wind_offset_m += self.wind_velocity * dt_seconds;
        }
        self.last_update = Some(ctx.julian_day);

        self.uniform = CloudUniform {
            altitude_m: self.params.altitude_m as f32,
            coverage: self.params.coverage as f32,
            sharpness: self.params.sharpness as f32,
            sun_intensity: sun_intensity_curve(ctx.sun.direction().y),
            wind_offset_m: [
                self.params.wind_offset_m.x as f32,
                self.params.wind_offset_m.y as f32,
            ],
            _padding: [0.0; 2],
        };
    }

    fn precompute(&mut self) {
        match bake_density_map(&self.generator, &self.bake) {
            Ok(map) => self.density = map,
            Err(err) => {
                // A misconfigured bake leaves the previous map in place;
                // the sky renders without this layer rather than crashing.
                tracing::warn!(%err, "cloud bake failed, keeping previous density map");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use welkin_astro::Observer;

    fn noon_context() -> FrameContext {
        // 2024-06-21 12:00 UT at Greenwich: high summer sun.
        FrameContext::new(JulianDay(2_460_483.0), Observer::from_degrees(51.48, 0.0))
    }

    fn midnight_context() -> FrameContext {
        FrameContext::new(JulianDay(2_460_482.5), Observer::from_degrees(51.48, 0.0))
    }

    #[test]
    fn test_layers_drive_through_shared_contract() {
        let ctx = noon_context();
        let mut layers: Vec<Box<dyn SkyLayer>> = vec![
            Box::new(SunLayer::new()),
            Box::new(MoonLayer::new()),
            Box::new(StarLayer::new(7, 500)),
            Box::new(CloudLayer::new(
                CloudLayerParams::stratus(2_500.0),
                CloudBakeConfig {
                    size: 16,
                    ..CloudBakeConfig::default()
                },
                7,
            )),
        ];
        for layer in &mut layers {
            layer.precompute();
            layer.update(&ctx);
        }
    }

    #[test]
    fn test_sun_layer_tracks_context() {
        let ctx = noon_context();
        let mut sun = SunLayer::new();
        sun.update(&ctx);
        let uniform = sun.uniform();
        assert!(
            uniform.direction[1] > 0.8,
            "summer noon sun should be high: {:?}",
            uniform.direction
        );
        assert!(uniform.intensity > 0.99, "full daylight, got {}", uniform.intensity);
        assert!(
            (uniform.angular_diameter - 0.0091).abs() < 0.0005,
            "sun disk ≈ 0.53°, got {} rad",
            uniform.angular_diameter
        );
    }

    #[test]
    fn test_sun_sets_and_intensity_dies() {
        let mut sun = SunLayer::new();
        sun.update(&midnight_context());
        assert_eq!(sun.uniform().intensity, 0.0, "no sunlight at night");
    }

    #[test]
    fn test_stars_visible_at_night_only() {
        let mut stars = StarLayer::new(11, 300);
        stars.update(&midnight_context());
        let night = stars.uniform().visibility;
        stars.update(&noon_context());
        let day = stars.uniform().visibility;
        assert_eq!(night, 1.0, "stars fully visible at night");
        assert_eq!(day, 0.0, "stars invisible at noon");
    }

    #[test]
    fn test_star_precompute_fills_catalog() {
        let mut stars = StarLayer::new(11, 2_000);
        assert!(stars.catalog().is_empty());
        stars.precompute();
        assert!(!stars.catalog().is_empty(), "precompute should bake a catalog");
    }

    #[test]
    fn test_cloud_wind_scrolls_between_frames() {
        let mut clouds = CloudLayer::new(
            CloudLayerParams::stratus(2_500.0),
            CloudBakeConfig {
                size: 16,
                ..CloudBakeConfig::default()
            },
            3,
        );
        clouds.set_wind_velocity(glam::DVec2::new(10.0, 0.0));

        let observer = Observer::from_degrees(51.48, 0.0);
        clouds.update(&FrameContext::new(JulianDay(2_460_483.0), observer));
        let first = clouds.uniform().wind_offset_m;

        // One minute later the layer has drifted 600 m.
        clouds.update(&FrameContext::new(
            JulianDay(2_460_483.0 + 60.0 / 86_400.0),
            observer,
        ));
        let second = clouds.uniform().wind_offset_m;
        assert!(
            (second[0] - first[0] - 600.0).abs() < 1.0,
            "wind drift = {} m, expected ≈ 600 m",
            second[0] - first[0]
        );
    }

    #[test]
    fn test_cloud_precompute_bakes_density() {
        let mut clouds = CloudLayer::new(
            CloudLayerParams::stratus(2_500.0),
            CloudBakeConfig {
                size: 16,
                ..CloudBakeConfig::default()
            },
            3,
        );
        clouds.precompute();
        assert_eq!(clouds.density_map().len(), 16 * 16);
    }

    #[test]
    fn test_moon_phase_in_uniform_matches_context() {
        let ctx = noon_context();
        let mut moon = MoonLayer::new();
        moon.update(&ctx);
        assert_eq!(
            moon.uniform().phase_fraction,
            ctx.moon_illuminated_fraction as f32
        );
    }

    #[test]
    fn test_uniform_blocks_are_gpu_aligned() {
        assert_eq!(std::mem::size_of::<SunUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<MoonUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<StarUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<CloudUniform>() % 16, 0);
    }
}
