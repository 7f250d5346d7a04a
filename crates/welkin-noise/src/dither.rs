//! Hash-based dither signal for per-pixel banding breakup.
//!
//! Deliberately not the coherent generator: dithering wants spatially
//! uncorrelated values at one evaluation per sample, so this is a plain
//! integer avalanche (SplitMix64 finalizer) over the coordinate bit
//! patterns and a seed. Same determinism contract as the coherent noise:
//! identical input and seed give identical output.

/// Uncorrelated dither value in `[-1, 1]` for a 2D coordinate and seed.
pub fn dither(x: f32, y: f32, seed: u32) -> f32 {
    let mut h = (x.to_bits() as u64)
        ^ ((y.to_bits() as u64) << 32)
        ^ (seed as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);

    // SplitMix64 finalizer.
    h ^= h >> 30;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^= h >> 31;

    // Top 24 bits to a float in [0, 1), then to [-1, 1].
    let unit = (h >> 40) as f32 / (1u32 << 24) as f32;
    unit * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        for k in 0..100 {
            let x = k as f32 * 0.73;
            let y = k as f32 * 1.21;
            assert_eq!(dither(x, y, 7), dither(x, y, 7), "diverged at ({x},{y})");
        }
    }

    #[test]
    fn test_stays_in_range() {
        for i in 0..64 {
            for j in 0..64 {
                let d = dither(i as f32, j as f32, 42);
                assert!((-1.0..=1.0).contains(&d), "dither {d} out of range");
            }
        }
    }

    #[test]
    fn test_seed_changes_pattern() {
        let mut differing = 0;
        for k in 0..100 {
            let x = k as f32 * 0.5;
            if dither(x, x, 1) != dither(x, x, 2) {
                differing += 1;
            }
        }
        assert!(differing > 90, "only {differing}/100 samples changed with seed");
    }

    #[test]
    fn test_neighbors_are_uncorrelated() {
        // Unlike coherent noise, adjacent pixels should jump around; a
        // mean absolute neighbor difference near 2/3 matches independent
        // uniform values.
        let mut total = 0.0;
        let count = 500;
        for k in 0..count {
            let x = k as f32;
            total += (dither(x + 1.0, 3.0, 9) - dither(x, 3.0, 9)).abs();
        }
        let mean = total / count as f32;
        assert!(
            (0.4..1.0).contains(&mean),
            "mean neighbor delta = {mean}, expected ≈ 2/3"
        );
    }

    #[test]
    fn test_disagrees_with_coherent_noise() {
        // Different algorithms: the dither hash must not reproduce the
        // smooth generator.
        let generator = crate::NoiseGenerator::new(9);
        let mut agreements = 0;
        for k in 0..50 {
            let x = k as f32 * 0.37;
            let y = k as f32 * 0.59;
            let d = dither(x, y, 9) as f64;
            if (d - generator.noise2(x as f64, y as f64)).abs() < 1e-9 {
                agreements += 1;
            }
        }
        assert!(agreements < 3, "hash matched coherent noise {agreements} times");
    }
}
