//! Astronomical models for sky rendering: the Earth model (orbital
//! eccentricity, nutation, obliquity, refraction, atmosphere constants),
//! sidereal time, coordinate frames, and sun/moon ephemerides.
//!
//! Every function is a pure, stateless function of a
//! [`welkin_time::JulianDay`] (plus at most one extra scalar) and is safe to
//! call concurrently. Angles are radians everywhere; distances are
//! kilometers unless a name says otherwise.

pub mod coords;
pub mod earth;
pub mod error;
pub mod moon;
pub mod nutation;
pub mod sidereal;
pub mod sun;

pub use coords::{EclipticCoords, EquatorialCoords, HorizontalCoords, Observer};
pub use earth::{
    apparent_angular_moon_diameter, apparent_angular_sun_diameter, apparent_magnitude_limit,
    atmosphere_thickness, atmosphere_thickness_non_uniform, atmospheric_refraction,
    mean_obliquity, mean_radius, orbit_eccentricity, true_obliquity,
    view_distance_within_atmosphere,
};
pub use error::AstroError;
pub use moon::{moon_distance_km, moon_illuminated_fraction, moon_position};
pub use nutation::{longitude_nutation, obliquity_nutation};
pub use sidereal::{earth_rotation_angle, greenwich_mean_sidereal_time, local_sidereal_time};
pub use sun::{sun_distance_au, sun_position};

/// Kilometers per astronomical unit (IAU 2012 exact definition).
pub const AU_KM: f64 = 149_597_870.7;

/// Arcseconds to radians: 1″ = π / 648 000.
pub const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648_000.0;
