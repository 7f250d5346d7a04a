//! Noise synthesis error types.

/// Errors from the fractal octave accumulator.
///
/// The base noise functions accept any finite input and cannot fail; only
/// the octave parameters have a domain to violate.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NoiseError {
    /// A fractal sum over zero octaves is meaningless.
    #[error("fractal octave count must be at least 1")]
    InvalidOctaveCount,

    /// Octave amplitudes are divided by `alpha^k`; zero would blow up.
    #[error("octave amplitude divisor must be non-zero, got {0}")]
    ZeroAmplitudeDivisor(f64),
}
