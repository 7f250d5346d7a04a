//! Cloud density texture baking from fractal noise.

use welkin_noise::{NoiseError, NoiseGenerator};

/// Parameters for baking one cloud density map.
#[derive(Clone, Debug)]
pub struct CloudBakeConfig {
    /// Edge length of the square map in texels.
    pub size: u32,
    /// Octave amplitude divisor (each octave is `1/alpha` as strong).
    pub alpha: f64,
    /// Octave frequency multiplier.
    pub beta: f64,
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Fraction of the map that should carry cloud, `[0, 1]`.
    pub coverage: f64,
    /// Density-edge sharpness exponent; higher is crisper.
    pub sharpness: f64,
}

impl Default for CloudBakeConfig {
    fn default() -> Self {
        Self {
            size: 256,
            alpha: 2.0,
            beta: 2.0,
            octaves: 5,
            coverage: 0.5,
            sharpness: 1.4,
        }
    }
}

/// Bake a `size × size` density map in `[0, 1]`, row-major.
///
/// Deterministic for a fixed generator seed/frequency and config; the
/// renderer uploads the result as a single-channel texture at load time.
pub fn bake_density_map(
    generator: &NoiseGenerator,
    config: &CloudBakeConfig,
) -> Result<Vec<f32>, NoiseError> {
    let size = config.size as usize;
    let mut map = Vec::with_capacity(size * size);

    // The octave sum is bounded by Σ alpha^-k; normalize back to [-1, 1].
    let mut amplitude_bound = 0.0;
    let mut amplitude = 1.0;
    for _ in 0..config.octaves {
        amplitude_bound += amplitude;
        amplitude /= config.alpha.abs().max(1e-9);
    }

    for row in 0..size {
        for col in 0..size {
            // Sample mid-texel so edges are not lattice-aligned.
            let x = (col as f64 + 0.5) / size as f64 * 8.0;
            let y = (row as f64 + 0.5) / size as f64 * 8.0;
            let n = generator.fractal2(x, y, config.alpha, config.beta, config.octaves)?;
            let unit = (n / amplitude_bound + 1.0) * 0.5;

            // Coverage thresholding with a sharpness-shaped edge.
            let shaped = if config.coverage <= 0.0 {
                0.0
            } else {
                ((unit - (1.0 - config.coverage)) / config.coverage)
                    .clamp(0.0, 1.0)
                    .powf(config.sharpness)
            };
            map.push(shaped as f32);
        }
    }

    tracing::info!(
        size = config.size,
        octaves = config.octaves,
        coverage = config.coverage,
        "cloud density map baked"
    );
    Ok(map)
}
