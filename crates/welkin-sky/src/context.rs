//! The per-frame astronomical context shared by every sky layer.

use welkin_astro::{
    HorizontalCoords, Observer, apparent_angular_moon_diameter, apparent_angular_sun_diameter,
    apparent_magnitude_limit, atmospheric_refraction, moon_illuminated_fraction, moon_position,
    sun_position,
};
use welkin_time::JulianDay;

/// Everything the layers need for one frame, computed once.
///
/// Body positions are apparent horizontal coordinates: refraction is folded
/// into the altitude where the correction is defined (above −5°); bodies
/// deeper below the horizon keep their geometric altitude, where the error
/// cannot matter visually.
#[derive(Clone, Debug)]
pub struct FrameContext {
    /// The frame's instant.
    pub julian_day: JulianDay,
    /// The ground observer.
    pub observer: Observer,
    /// Apparent sun position.
    pub sun: HorizontalCoords,
    /// Apparent moon position.
    pub moon: HorizontalCoords,
    /// Solar disk diameter in radians.
    pub sun_angular_diameter: f64,
    /// Lunar disk diameter in radians.
    pub moon_angular_diameter: f64,
    /// Illuminated fraction of the lunar disk, `[0, 1]`.
    pub moon_illuminated_fraction: f64,
    /// Faintest renderable star magnitude.
    pub magnitude_limit: f64,
}

impl FrameContext {
    /// Compute the frame context for `t` as seen by `observer`.
    pub fn new(t: JulianDay, observer: Observer) -> Self {
        let sun_eq = sun_position(t).to_equatorial(t);
        let moon_eq = moon_position(t).to_equatorial(t);

        Self {
            julian_day: t,
            observer,
            sun: refracted(observer.horizontal(&sun_eq, t)),
            moon: refracted(observer.horizontal(&moon_eq, t)),
            sun_angular_diameter: apparent_angular_sun_diameter(t),
            moon_angular_diameter: apparent_angular_moon_diameter(t),
            moon_illuminated_fraction: moon_illuminated_fraction(t),
            magnitude_limit: apparent_magnitude_limit(),
        }
    }
}

/// Fold refraction into the altitude where the correction is defined.
fn refracted(mut hor: HorizontalCoords) -> HorizontalCoords {
    if let Ok(lift) = atmospheric_refraction(hor.altitude) {
        hor.altitude += lift;
    }
    hor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_deterministic() {
        let t = JulianDay(2_460_310.75);
        let observer = Observer::from_degrees(52.5, 13.4);
        let a = FrameContext::new(t, observer);
        let b = FrameContext::new(t, observer);
        assert_eq!(a.sun, b.sun);
        assert_eq!(a.moon, b.moon);
        assert_eq!(a.moon_illuminated_fraction, b.moon_illuminated_fraction);
    }

    #[test]
    fn test_disks_subtend_half_a_degree() {
        let ctx = FrameContext::new(
            JulianDay(2_460_310.5),
            Observer::from_degrees(48.1, 11.6),
        );
        let sun_deg = ctx.sun_angular_diameter.to_degrees();
        let moon_deg = ctx.moon_angular_diameter.to_degrees();
        assert!((0.4..0.7).contains(&sun_deg), "sun disk = {sun_deg}°");
        assert!((0.4..0.7).contains(&moon_deg), "moon disk = {moon_deg}°");
    }

    #[test]
    fn test_deep_night_sun_keeps_geometric_altitude() {
        // Local midnight in midsummer at mid latitude: sun far below the
        // horizon, where no refraction correction applies.
        let ctx = FrameContext::new(
            JulianDay(2_460_482.5),
            Observer::from_degrees(45.0, 0.0),
        );
        assert!(
            ctx.sun.altitude < -0.2,
            "midnight sun altitude = {}",
            ctx.sun.altitude
        );
    }
}
