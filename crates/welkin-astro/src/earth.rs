//! The Earth model: orbital, rotational, and atmospheric quantities that
//! parameterize the rendered sky.
//!
//! Everything here is a pure function of Julian Day (or Julian Day plus one
//! scalar). Polynomial coefficients follow Meeus, "Astronomical Algorithms",
//! 2nd ed.; deviating from the reference tables shifts sun/moon positions in
//! visible ways, so they are pinned, not tuned.

use welkin_time::JulianDay;

use crate::error::AstroError;
use crate::nutation::obliquity_nutation;
use crate::{ARCSEC_TO_RAD, AU_KM};

/// Mean Earth radius in kilometers.
const MEAN_RADIUS_KM: f64 = 6_371.0;

/// Depth of a homogeneous (uniform sea-level density) atmosphere in meters,
/// p₀ / (ρ₀ · g) for standard conditions.
const ATMOSPHERE_THICKNESS_M: f64 = 8_435.0;

/// Effective atmosphere depth in meters, tuned for the exponential density
/// falloff of the real atmosphere.
const ATMOSPHERE_THICKNESS_NON_UNIFORM_M: f64 = 7_994.0;

/// Optical effective-Earth-radius factor: a refracted ray near the horizon
/// behaves as if the planet were larger by this ratio.
const OPTICAL_EFFECTIVE_RADIUS_FACTOR: f64 = 7.0 / 6.0;

/// Solar radius in kilometers.
const SUN_RADIUS_KM: f64 = 695_700.0;

/// Lunar radius in kilometers.
const MOON_RADIUS_KM: f64 = 1_737.4;

/// Mean Earth radius in kilometers. Constant; exposed as a function for
/// interface uniformity with the time-dependent quantities.
pub fn mean_radius() -> f64 {
    MEAN_RADIUS_KM
}

/// Homogeneous atmosphere depth in meters.
pub fn atmosphere_thickness() -> f64 {
    ATMOSPHERE_THICKNESS_M
}

/// Effective atmosphere depth in meters for exponential density falloff.
pub fn atmosphere_thickness_non_uniform() -> f64 {
    ATMOSPHERE_THICKNESS_NON_UNIFORM_M
}

/// Faintest apparent magnitude visible under typical atmospheric
/// extinction; the star-rendering cutoff.
pub fn apparent_magnitude_limit() -> f64 {
    6.5
}

/// Eccentricity of Earth's orbit, Meeus (25.4).
///
/// 0.016708634 at J2000.0, decreasing by ~4.2e-5 per century.
pub fn orbit_eccentricity(t: JulianDay) -> f64 {
    let tc = t.centuries_since_j2000();
    0.016_708_634 - 0.000_042_037 * tc - 0.000_000_126_7 * tc * tc
}

/// Mean obliquity of the ecliptic in radians, Meeus (22.2).
pub fn mean_obliquity(t: JulianDay) -> f64 {
    let tc = t.centuries_since_j2000();
    let arcsec = 84_381.448 - 46.815_0 * tc - 0.000_59 * tc * tc + 0.001_813 * tc * tc * tc;
    arcsec * ARCSEC_TO_RAD
}

/// True obliquity of the ecliptic in radians: the mean obliquity plus the
/// nutation in obliquity, by definition.
pub fn true_obliquity(t: JulianDay) -> f64 {
    mean_obliquity(t) + obliquity_nutation(t)
}

/// Apparent angular diameter of the solar disk in radians at time `t`.
pub fn apparent_angular_sun_diameter(t: JulianDay) -> f64 {
    let distance_km = crate::sun::sun_distance_au(t) * AU_KM;
    2.0 * (SUN_RADIUS_KM / distance_km).asin()
}

/// Apparent angular diameter of the lunar disk in radians at time `t`.
pub fn apparent_angular_moon_diameter(t: JulianDay) -> f64 {
    2.0 * (MOON_RADIUS_KM / crate::moon::moon_distance_km(t)).asin()
}

/// Atmospheric refraction to add to a true altitude (radians) to obtain the
/// apparent altitude.
///
/// Sæmundsson's formula (Meeus 16.4) in arcminutes, with the 0.0019279′
/// term that zeroes the correction at the zenith. Valid above the horizon;
/// altitudes in −5°..0° are evaluated at the horizon value (the formula has
/// no physical meaning below it), and anything deeper is a domain error.
pub fn atmospheric_refraction(altitude: f64) -> Result<f64, AstroError> {
    let altitude_deg = altitude.to_degrees();
    if altitude_deg < -5.0 {
        return Err(AstroError::Domain {
            value: altitude_deg,
            reason: "altitude below -5 deg has no refraction correction",
        });
    }
    let h = altitude_deg.max(0.0);
    let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan() + 0.001_927_9;
    Ok((arcmin / 60.0).to_radians())
}

/// Path length in meters through the atmosphere shell from ground level
/// along a normalized view direction with vertical component `y`.
///
/// With `refraction_corrected`, the ray is bent by substituting the optical
/// effective Earth radius, lengthening near-horizon paths. `y` outside
/// `[-1, 1]` cannot come from a normalized direction and is a domain error;
/// downward components evaluate at the horizon.
pub fn view_distance_within_atmosphere(
    y: f64,
    refraction_corrected: bool,
) -> Result<f64, AstroError> {
    if !(-1.0..=1.0).contains(&y) {
        return Err(AstroError::Domain {
            value: y,
            reason: "vertical component of a unit vector must lie in [-1, 1]",
        });
    }
    let mut r = mean_radius() * 1_000.0;
    if refraction_corrected {
        r *= OPTICAL_EFFECTIVE_RADIUS_FACTOR;
    }
    let t = atmosphere_thickness_non_uniform();
    let y = y.max(0.0);

    // Forward root of |o + d·s| = r + t with the observer at radius r.
    let ry = r * y;
    Ok((ry * ry + 2.0 * r * t + t * t).sqrt() - ry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use welkin_time::J2000;

    #[test]
    fn test_eccentricity_reference_value_at_j2000() {
        let e = orbit_eccentricity(J2000);
        assert!(
            (e - 0.016_708_634).abs() < 1e-9,
            "e(J2000) = {e}, expected 0.016708634"
        );
    }

    #[test]
    fn test_eccentricity_slowly_decreasing() {
        let e0 = orbit_eccentricity(J2000);
        let e1 = orbit_eccentricity(JulianDay(J2000.0 + 36_525.0));
        assert!(e1 < e0, "eccentricity should shrink over a century");
        assert!((e0 - e1) < 1e-4, "but only slightly: Δe = {}", e0 - e1);
    }

    #[test]
    fn test_true_obliquity_is_definitional_sum() {
        for &jd in &[2_446_895.5, 2_451_545.0, 2_460_310.5] {
            let t = JulianDay(jd);
            assert_eq!(
                true_obliquity(t),
                mean_obliquity(t) + obliquity_nutation(t),
                "identity must hold exactly at JD {jd}"
            );
        }
    }

    #[test]
    fn test_mean_obliquity_meeus_example() {
        // Meeus example 22.a: 1987 April 10.0, ε₀ = 23°26′27.407″.
        let eps = mean_obliquity(JulianDay(2_446_895.5));
        let expected = (23.0 + 26.0 / 60.0 + 27.407 / 3600.0_f64).to_radians();
        assert!(
            (eps - expected).abs() < 0.01 * ARCSEC_TO_RAD,
            "ε₀ = {}°, expected 23.440946°",
            eps.to_degrees()
        );
    }

    #[test]
    fn test_constants_are_bit_stable() {
        assert_eq!(mean_radius().to_bits(), mean_radius().to_bits());
        assert_eq!(
            atmosphere_thickness().to_bits(),
            atmosphere_thickness().to_bits()
        );
        assert!(atmosphere_thickness_non_uniform() < atmosphere_thickness());
        assert_eq!(apparent_magnitude_limit(), 6.5);
    }

    #[test]
    fn test_refraction_horizon_magnitude() {
        // Classic value: about 29′ of lift right at the horizon.
        let r = atmospheric_refraction(0.0).unwrap().to_degrees() * 60.0;
        assert!((r - 29.0).abs() < 1.0, "horizon refraction = {r}′");
    }

    #[test]
    fn test_refraction_monotonic_and_vanishing_at_zenith() {
        let mut prev = f64::INFINITY;
        for deg in 0..=90 {
            let r = atmospheric_refraction((deg as f64).to_radians()).unwrap();
            assert!(
                r < prev,
                "refraction must decrease with altitude, rose at {deg}°"
            );
            prev = r;
        }
        let zenith = atmospheric_refraction(90.0_f64.to_radians()).unwrap();
        assert!(
            zenith.abs() < 0.1 * ARCSEC_TO_RAD,
            "zenith refraction = {}″, expected ≈ 0",
            zenith / ARCSEC_TO_RAD
        );
    }

    #[test]
    fn test_refraction_saturates_just_below_horizon() {
        let at_horizon = atmospheric_refraction(0.0).unwrap();
        let below = atmospheric_refraction((-2.0_f64).to_radians()).unwrap();
        assert_eq!(below, at_horizon, "−5°..0° evaluates at the horizon value");
    }

    #[test]
    fn test_refraction_rejects_deep_altitudes() {
        let r = atmospheric_refraction((-30.0_f64).to_radians());
        assert!(matches!(r, Err(AstroError::Domain { .. })), "{r:?}");
    }

    #[test]
    fn test_view_distance_zenith_equals_thickness() {
        let d = view_distance_within_atmosphere(1.0, false).unwrap();
        assert!(
            (d - atmosphere_thickness_non_uniform()).abs() < 1e-6,
            "zenith path = {d} m, expected the shell thickness"
        );
    }

    #[test]
    fn test_view_distance_horizon_is_hundreds_of_km() {
        let d = view_distance_within_atmosphere(0.0, false).unwrap();
        assert!(
            (200_000.0..500_000.0).contains(&d),
            "horizon path = {d} m, expected a few hundred kilometers"
        );
    }

    #[test]
    fn test_view_distance_positive_finite_and_monotonic() {
        let mut prev = f64::INFINITY;
        for k in 0..=100 {
            let y = k as f64 / 100.0;
            let d = view_distance_within_atmosphere(y, false).unwrap();
            assert!(d.is_finite() && d > 0.0, "path at y={y} is {d}");
            assert!(d <= prev, "path must shrink toward the zenith");
            prev = d;
        }
    }

    #[test]
    fn test_refraction_correction_lengthens_horizon_path() {
        let plain = view_distance_within_atmosphere(0.0, false).unwrap();
        let bent = view_distance_within_atmosphere(0.0, true).unwrap();
        assert!(
            bent > plain,
            "refraction bends rays around the horizon: {bent} <= {plain}"
        );
    }

    #[test]
    fn test_view_distance_rejects_non_unit_components() {
        assert!(view_distance_within_atmosphere(1.5, false).is_err());
        assert!(view_distance_within_atmosphere(-1.01, true).is_err());
    }

    #[test]
    fn test_angular_diameters_plausible() {
        // Both disks subtend close to half a degree; that coincidence is
        // what makes solar eclipses work.
        let t = JulianDay(2_460_310.5);
        let sun = apparent_angular_sun_diameter(t).to_degrees();
        let moon = apparent_angular_moon_diameter(t).to_degrees();
        assert!((0.52..0.55).contains(&sun), "sun diameter = {sun}°");
        assert!((0.48..0.57).contains(&moon), "moon diameter = {moon}°");
    }
}
