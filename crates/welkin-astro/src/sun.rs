//! Solar ephemeris, Meeus chapter 25 (low-accuracy form).
//!
//! Accurate to about 0.01° in longitude — a hundredth of the solar disk's
//! width, invisible in a rendered sky. The apparent longitude includes
//! nutation and aberration so that equinox timing comes out right.

use std::f64::consts::TAU;

use welkin_time::JulianDay;

use crate::coords::EclipticCoords;
use crate::earth::orbit_eccentricity;
use crate::AU_KM;

/// Geometric mean longitude L₀ in radians.
fn mean_longitude(tc: f64) -> f64 {
    (280.466_46 + 36_000.769_83 * tc + 0.000_303_2 * tc * tc)
        .to_radians()
        .rem_euclid(TAU)
}

/// Mean anomaly M in radians.
fn mean_anomaly(tc: f64) -> f64 {
    (357.529_11 + 35_999.050_29 * tc - 0.000_153_7 * tc * tc)
        .to_radians()
        .rem_euclid(TAU)
}

/// Equation of center C in radians.
fn equation_of_center(tc: f64, m: f64) -> f64 {
    ((1.914_602 - 0.004_817 * tc - 0.000_014 * tc * tc) * m.sin()
        + (0.019_993 - 0.000_101 * tc) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin())
    .to_radians()
}

/// Sun-Earth distance in astronomical units at time `t`.
pub fn sun_distance_au(t: JulianDay) -> f64 {
    let tc = t.centuries_since_j2000();
    let m = mean_anomaly(tc);
    let e = orbit_eccentricity(t);
    let true_anomaly = m + equation_of_center(tc, m);
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos())
}

/// Apparent geocentric ecliptic position of the sun at time `t`.
///
/// The longitude is the apparent one (nutation and aberration applied);
/// latitude is within 1.2″ of zero and treated as zero at this accuracy.
pub fn sun_position(t: JulianDay) -> EclipticCoords {
    let tc = t.centuries_since_j2000();
    let m = mean_anomaly(tc);
    let true_longitude = mean_longitude(tc) + equation_of_center(tc, m);

    // Nutation + aberration folded in via the Ω correction, Meeus (25.8).
    let omega = (125.04 - 1_934.136 * tc).to_radians();
    let apparent =
        true_longitude + (-0.005_69 - 0.004_78 * omega.sin()).to_radians();

    EclipticCoords {
        longitude: apparent.rem_euclid(TAU),
        latitude: 0.0,
        distance_km: sun_distance_au(t) * AU_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Observer;

    #[test]
    fn test_meeus_solar_example() {
        // Meeus example 25.a: 1992 October 13.0 TD,
        // apparent λ = 199.90895°, R = 0.99766 AU.
        let t = JulianDay(2_448_908.5);
        let pos = sun_position(t);
        let lon_deg = pos.longitude.to_degrees();
        assert!(
            (lon_deg - 199.908_95).abs() < 0.01,
            "λ = {lon_deg}°, expected 199.90895°"
        );
        let r = sun_distance_au(t);
        assert!((r - 0.997_66).abs() < 1e-4, "R = {r} AU, expected 0.99766");
    }

    #[test]
    fn test_march_equinox_longitude_wraps_zero() {
        // 2000 March 20, 07:35 UT: apparent longitude crosses 0°.
        let t = JulianDay(2_451_623.816);
        let lon_deg = sun_position(t).longitude.to_degrees();
        let from_zero = lon_deg.min(360.0 - lon_deg);
        assert!(
            from_zero < 0.02,
            "equinox longitude = {lon_deg}°, expected ≈ 0°/360°"
        );
    }

    #[test]
    fn test_distance_extremes_at_perihelion_and_aphelion() {
        // Early January: ~0.9833 AU. Early July: ~1.0167 AU.
        let january = sun_distance_au(JulianDay(2_451_548.0));
        let july = sun_distance_au(JulianDay(2_451_730.0));
        assert!((january - 0.9833).abs() < 0.001, "January R = {january} AU");
        assert!((july - 1.0167).abs() < 0.001, "July R = {july} AU");
    }

    #[test]
    fn test_noon_sun_roughly_south_at_greenwich() {
        // 2024-06-21 12:00 UT at Greenwich: sun near upper culmination,
        // azimuth close to due south, altitude near 62°.
        let t = JulianDay(2_460_483.0);
        let observer = Observer::from_degrees(51.48, 0.0);
        let eq = sun_position(t).to_equatorial(t);
        let hor = observer.horizontal(&eq, t);
        let az_deg = hor.azimuth.to_degrees();
        let alt_deg = hor.altitude.to_degrees();
        assert!(
            (150.0..210.0).contains(&az_deg),
            "solstice noon azimuth = {az_deg}°, expected southerly"
        );
        assert!(
            (58.0..64.0).contains(&alt_deg),
            "solstice noon altitude = {alt_deg}°, expected ≈ 62°"
        );
    }

    #[test]
    fn test_sun_below_horizon_at_midnight() {
        // 2024-06-21 00:00 UT at Greenwich.
        let t = JulianDay(2_460_482.5);
        let observer = Observer::from_degrees(51.48, 0.0);
        let eq = sun_position(t).to_equatorial(t);
        let hor = observer.horizontal(&eq, t);
        assert!(
            hor.altitude < 0.0,
            "midnight sun altitude = {}°",
            hor.altitude.to_degrees()
        );
    }
}
