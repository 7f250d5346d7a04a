//! Celestial coordinate frames and the transformations between them.
//!
//! Three frames appear on the way from an ephemeris to a shader uniform:
//! geocentric ecliptic (where the sun/moon series live), equatorial
//! (right ascension/declination), and horizontal (azimuth/altitude for a
//! ground observer). All angles are radians; azimuth is measured from north
//! through east.

use std::f64::consts::{PI, TAU};

use welkin_time::JulianDay;

use crate::earth::{atmospheric_refraction, true_obliquity};
use crate::error::AstroError;
use crate::sidereal::local_sidereal_time;

/// Geocentric ecliptic position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EclipticCoords {
    /// Ecliptic longitude λ, `[0, 2π)`.
    pub longitude: f64,
    /// Ecliptic latitude β, `[−π/2, π/2]`.
    pub latitude: f64,
    /// Distance from Earth's center in kilometers.
    pub distance_km: f64,
}

/// Equatorial position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension α, `[0, 2π)`.
    pub right_ascension: f64,
    /// Declination δ, `[−π/2, π/2]`.
    pub declination: f64,
    /// Distance from Earth's center in kilometers.
    pub distance_km: f64,
}

/// Horizontal (topocentric direction) position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalCoords {
    /// Azimuth from north through east, `[0, 2π)`.
    pub azimuth: f64,
    /// Altitude above the horizon, `[−π/2, π/2]`.
    pub altitude: f64,
    /// Distance from the observer in kilometers.
    pub distance_km: f64,
}

impl EclipticCoords {
    /// Transform to the equatorial frame using the true obliquity at `t`.
    pub fn to_equatorial(&self, t: JulianDay) -> EquatorialCoords {
        let eps = true_obliquity(t);
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_eps, cos_eps) = eps.sin_cos();

        let ra = (sin_lon * cos_eps - self.latitude.tan() * sin_eps).atan2(cos_lon);
        let dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).asin();

        EquatorialCoords {
            right_ascension: ra.rem_euclid(TAU),
            declination: dec,
            distance_km: self.distance_km,
        }
    }
}

impl HorizontalCoords {
    /// Unit direction vector for shader use: `x` east, `y` up, `z` north.
    pub fn direction(&self) -> glam::Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        glam::Vec3::new(
            (sin_az * cos_alt) as f32,
            sin_alt as f32,
            (cos_az * cos_alt) as f32,
        )
    }
}

/// A ground observer, positioned by geographic latitude and east longitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observer {
    /// Geographic latitude φ in radians, north positive.
    pub latitude: f64,
    /// Geographic longitude in radians, east positive.
    pub longitude: f64,
}

impl Observer {
    /// Create an observer from degrees, the unit config files use.
    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: latitude_deg.to_radians(),
            longitude: longitude_deg.to_radians(),
        }
    }

    /// Transform an equatorial position to this observer's horizontal frame
    /// at time `t`. Returns the true (airless) altitude.
    pub fn horizontal(&self, eq: &EquatorialCoords, t: JulianDay) -> HorizontalCoords {
        let lst = local_sidereal_time(t, self.longitude);
        let hour_angle = lst - eq.right_ascension;

        let (sin_h, cos_h) = hour_angle.sin_cos();
        let (sin_phi, cos_phi) = self.latitude.sin_cos();
        let (sin_dec, cos_dec) = eq.declination.sin_cos();

        // Meeus (13.5/13.6); his azimuth is from south, ours from north.
        let az_south = sin_h.atan2(cos_h * sin_phi - eq.declination.tan() * cos_phi);
        let altitude = (sin_phi * sin_dec + cos_phi * cos_dec * cos_h).asin();

        HorizontalCoords {
            azimuth: (az_south + PI).rem_euclid(TAU),
            altitude,
            distance_km: eq.distance_km,
        }
    }

    /// Like [`Observer::horizontal`], with atmospheric refraction folded
    /// into the altitude so the result matches what the sky shows.
    pub fn apparent_horizontal(
        &self,
        eq: &EquatorialCoords,
        t: JulianDay,
    ) -> Result<HorizontalCoords, AstroError> {
        let mut hor = self.horizontal(eq, t);
        hor.altitude += atmospheric_refraction(hor.altitude)?;
        Ok(hor)
    }
}
