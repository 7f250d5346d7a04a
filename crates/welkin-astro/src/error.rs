//! Astronomy error types.

/// Errors from the Earth model and ephemeris functions.
///
/// Wrong astronomical values propagate into visually-wrong skies that are
/// hard to debug, so out-of-range inputs fail loudly instead of being
/// silently clamped.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AstroError {
    /// An input lies outside the function's documented domain.
    #[error("input outside valid domain: {reason} (got {value})")]
    Domain {
        /// The offending input value.
        value: f64,
        /// Which bound was violated.
        reason: &'static str,
    },
}
