//! Procedural star catalog: deterministic placement on the sky sphere with
//! a magnitude distribution cut at the Earth model's visibility limit.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One star of the procedural catalog.
#[derive(Clone, Debug)]
pub struct StarPoint {
    /// Unit direction on the sky sphere (equatorial frame at the epoch).
    pub direction: glam::Vec3,
    /// Apparent magnitude; lower is brighter.
    pub apparent_magnitude: f32,
    /// Linear RGB color from the star's temperature.
    pub color: [f32; 3],
}

impl StarPoint {
    /// Linear brightness relative to a magnitude-0 star.
    pub fn brightness(&self) -> f32 {
        10.0_f32.powf(-0.4 * self.apparent_magnitude)
    }
}

/// Generate a deterministic star catalog.
///
/// Draws `count` candidates with a magnitude distribution that is heavy on
/// faint stars (as the real sky is) and keeps only those brighter than
/// `magnitude_limit`. Identical seeds give identical catalogs.
pub fn generate_catalog(seed: u64, count: u32, magnitude_limit: f32) -> Vec<StarPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count as usize);

    for _ in 0..count {
        // Uniform direction on the sphere.
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
        let direction = glam::Vec3::new(
            phi.sin() * theta.cos(),
            phi.cos(),
            phi.sin() * theta.sin(),
        );

        // Faint stars dominate: skew the unit draw toward high magnitudes,
        // spanning roughly -1 (brightest) to +8 before the cut.
        let raw: f32 = rng.random();
        let apparent_magnitude = 8.0 - 9.0 * raw * raw * raw;

        // Keep drawing color even for culled stars so the stream position
        // does not depend on the limit.
        let temperature = 2_500.0 + rng.random::<f32>().powf(2.0) * 27_500.0;
        let color = blackbody_to_rgb(temperature);

        if apparent_magnitude <= magnitude_limit {
            stars.push(StarPoint {
                direction,
                apparent_magnitude,
                color,
            });
        }
    }

    tracing::debug!(
        kept = stars.len(),
        drawn = count,
        magnitude_limit,
        "star catalog generated"
    );
    stars
}

/// Approximate sRGB color of a blackbody at `temperature_k` Kelvin
/// (Tanner Helland's Planckian locus fit).
pub fn blackbody_to_rgb(temperature_k: f32) -> [f32; 3] {
    let t = temperature_k / 100.0;
    let r = if t <= 66.0 {
        1.0
    } else {
        (329.698_73 * (t - 60.0).powf(-0.133_204_76) / 255.0).clamp(0.0, 1.0)
    };
    let g = if t <= 66.0 {
        (99.470_8 * t.ln() - 161.119_57).clamp(0.0, 255.0) / 255.0
    } else {
        (288.122_17 * (t - 60.0).powf(-0.075_514_85) / 255.0).clamp(0.0, 1.0)
    };
    let b = if t >= 66.0 {
        1.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.517_73 * (t - 10.0).ln() - 305.044_8).clamp(0.0, 255.0) / 255.0
    };
    [r, g, b]
}
