//! Atmosphere geometry error types.

/// Errors from shell geometry and scattering setup.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AtmosphereError {
    /// The ray has no forward intersection with the target shell, or the
    /// observer is not inside it. The caller should skip shading this
    /// sample rather than receive a nonsensical distance.
    #[error(
        "ray misses shell: observer at radius {observer_radius_m} m, shell radius {shell_radius_m} m"
    )]
    GeometryMiss {
        /// Observer distance from the planet center in meters.
        observer_radius_m: f64,
        /// Target shell radius in meters.
        shell_radius_m: f64,
    },

    /// An input lies outside the function's documented domain.
    #[error("input outside valid domain: {reason} (got {value})")]
    Domain {
        /// The offending input value.
        value: f64,
        /// Which bound was violated.
        reason: &'static str,
    },
}
