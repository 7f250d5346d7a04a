//! Seeded coherent gradient noise over one to three dimensions.
//!
//! Classic permutation-table technique: a seeded shuffle of 0..=255 hashes
//! lattice points to gradients, and a quintic fade blends the corner
//! contributions. The generator is an explicit object — callers own their
//! seed and frequency instead of poking process-wide state — but keeps the
//! familiar configure-once, sample-many usage pattern.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::NoiseError;

const TABLE_SIZE: usize = 256;

/// Quintic fade curve, zero first and second derivative at the endpoints.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// 3D gradient from the low hash bits: the twelve edge vectors of a cube.
fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// 2D gradients: axis and diagonal unit vectors.
const GRAD2: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
    (-std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
    (std::f64::consts::FRAC_1_SQRT_2, -std::f64::consts::FRAC_1_SQRT_2),
    (-std::f64::consts::FRAC_1_SQRT_2, -std::f64::consts::FRAC_1_SQRT_2),
];

/// Seeded coherent noise generator.
///
/// For a fixed seed and frequency, repeated queries at the same coordinate
/// return bit-identical values; reseeding or retuning affects only
/// subsequent calls. Samples lie in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    seed: u64,
    frequency: f64,
    /// Shuffled 0..=255, doubled so hash chains never need a modulo.
    perm: [usize; TABLE_SIZE * 2],
}

impl NoiseGenerator {
    /// Create a generator with the given seed at frequency 1.0.
    pub fn new(seed: u64) -> Self {
        let mut generator = Self {
            seed,
            frequency: 1.0,
            perm: [0; TABLE_SIZE * 2],
        };
        generator.set_seed(seed);
        generator
    }

    /// Rebuild the permutation table from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        let mut table: [usize; TABLE_SIZE] = std::array::from_fn(|i| i);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        table.shuffle(&mut rng);
        for i in 0..TABLE_SIZE {
            self.perm[i] = table[i];
            self.perm[i + TABLE_SIZE] = table[i];
        }
    }

    /// Scale applied to every input coordinate before lattice lookup.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Current seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current frequency.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    fn lattice(v: f64) -> (usize, f64) {
        let floor = v.floor();
        ((floor as i64).rem_euclid(TABLE_SIZE as i64) as usize, v - floor)
    }

    /// One-dimensional coherent noise in `[-1, 1]`.
    pub fn noise1(&self, x: f64) -> f64 {
        let (xi, xf) = Self::lattice(x * self.frequency);
        let g0 = self.perm[xi] as f64 / 127.5 - 1.0;
        let g1 = self.perm[xi + 1] as f64 / 127.5 - 1.0;
        lerp(fade(xf), g0 * xf, g1 * (xf - 1.0))
    }

    /// Two-dimensional coherent noise in `[-1, 1]`.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let (xi, xf) = Self::lattice(x * self.frequency);
        let (yi, yf) = Self::lattice(y * self.frequency);
        let u = fade(xf);
        let v = fade(yf);

        let corner = |dx: usize, dy: usize| {
            let (gx, gy) = GRAD2[self.perm[self.perm[xi + dx] + yi + dy] & 7];
            gx * (xf - dx as f64) + gy * (yf - dy as f64)
        };

        lerp(
            v,
            lerp(u, corner(0, 0), corner(1, 0)),
            lerp(u, corner(0, 1), corner(1, 1)),
        )
    }

    /// Three-dimensional coherent noise in `[-1, 1]`.
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, xf) = Self::lattice(x * self.frequency);
        let (yi, yf) = Self::lattice(y * self.frequency);
        let (zi, zf) = Self::lattice(z * self.frequency);
        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let p = &self.perm;
        let a = p[xi] + yi;
        let b = p[xi + 1] + yi;
        let aa = p[a] + zi;
        let ab = p[a + 1] + zi;
        let ba = p[b] + zi;
        let bb = p[b + 1] + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad3(p[aa], xf, yf, zf),
                    grad3(p[ba], xf - 1.0, yf, zf),
                ),
                lerp(
                    u,
                    grad3(p[ab], xf, yf - 1.0, zf),
                    grad3(p[bb], xf - 1.0, yf - 1.0, zf),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad3(p[aa + 1], xf, yf, zf - 1.0),
                    grad3(p[ba + 1], xf - 1.0, yf, zf - 1.0),
                ),
                lerp(
                    u,
                    grad3(p[ab + 1], xf, yf - 1.0, zf - 1.0),
                    grad3(p[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
                ),
            ),
        )
    }

    fn check_octaves(alpha: f64, octaves: u32) -> Result<(), NoiseError> {
        if octaves == 0 {
            return Err(NoiseError::InvalidOctaveCount);
        }
        if alpha == 0.0 {
            return Err(NoiseError::ZeroAmplitudeDivisor(alpha));
        }
        Ok(())
    }

    /// Fractal sum of 1D octaves: octave `k` is sampled at frequency
    /// `beta^k` and weighted `alpha^-k`. One octave reduces to [`Self::noise1`].
    pub fn fractal1(
        &self,
        x: f64,
        alpha: f64,
        beta: f64,
        octaves: u32,
    ) -> Result<f64, NoiseError> {
        Self::check_octaves(alpha, octaves)?;
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            sum += self.noise1(x * frequency) / amplitude;
            amplitude *= alpha;
            frequency *= beta;
        }
        Ok(sum)
    }

    /// Fractal sum of 2D octaves; see [`Self::fractal1`].
    pub fn fractal2(
        &self,
        x: f64,
        y: f64,
        alpha: f64,
        beta: f64,
        octaves: u32,
    ) -> Result<f64, NoiseError> {
        Self::check_octaves(alpha, octaves)?;
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            sum += self.noise2(x * frequency, y * frequency) / amplitude;
            amplitude *= alpha;
            frequency *= beta;
        }
        Ok(sum)
    }

    /// Fractal sum of 3D octaves; see [`Self::fractal1`].
    pub fn fractal3(
        &self,
        x: f64,
        y: f64,
        z: f64,
        alpha: f64,
        beta: f64,
        octaves: u32,
    ) -> Result<f64, NoiseError> {
        Self::check_octaves(alpha, octaves)?;
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            sum += self.noise3(x * frequency, y * frequency, z * frequency) / amplitude;
            amplitude *= alpha;
            frequency *= beta;
        }
        Ok(sum)
    }
}
