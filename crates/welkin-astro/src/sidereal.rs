//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! Needed to turn right ascension/declination into an hour angle for a
//! ground observer. ERA from IERS Conventions 2010 eq. 5.15; the GMST
//! polynomial from Capitaine et al. 2003, Table 2.

use std::f64::consts::TAU;

use welkin_time::{J2000, JulianDay};

use crate::ARCSEC_TO_RAD;

/// Earth Rotation Angle in radians, `[0, 2π)`.
pub fn earth_rotation_angle(t: JulianDay) -> f64 {
    let du = t.0 - J2000.0;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_48 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, `[0, 2π)`.
pub fn greenwich_mean_sidereal_time(t: JulianDay) -> f64 {
    let tc = t.centuries_since_j2000();
    let tc2 = tc * tc;
    let poly_arcsec = 0.014_506
        + 4_612.156_534 * tc
        + 1.391_581_7 * tc2
        - 0.000_000_44 * tc2 * tc
        - 0.000_029_956 * tc2 * tc2
        - 0.000_000_036_8 * tc2 * tc2 * tc;
    (earth_rotation_angle(t) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an observer at the given east longitude (radians).
pub fn local_sidereal_time(t: JulianDay, longitude_east: f64) -> f64 {
    (greenwich_mean_sidereal_time(t) + longitude_east).rem_euclid(TAU)
}
