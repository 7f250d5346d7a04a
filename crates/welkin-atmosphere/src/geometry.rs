//! Ray-shell intersections for cloud layers and the atmosphere boundary.

use glam::DVec3;

use crate::error::AtmosphereError;

/// Description of one screen-aligned cloud layer.
///
/// The altitude together with a view ray yields the ray-shell intersection
/// distance; that distance is derived per sample and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudLayerParams {
    /// Layer altitude above the mean Earth radius in meters.
    pub altitude_m: f64,
    /// Fraction of the sky the layer covers, `[0, 1]`.
    pub coverage: f64,
    /// Density-edge sharpness exponent, higher is crisper.
    pub sharpness: f64,
    /// Horizontal scroll offset in meters, advanced by wind per frame.
    pub wind_offset_m: glam::DVec2,
}

impl CloudLayerParams {
    /// A mid-level layer with soft edges and half coverage.
    pub fn stratus(altitude_m: f64) -> Self {
        Self {
            altitude_m,
            coverage: 0.5,
            sharpness: 1.0,
            wind_offset_m: glam::DVec2::ZERO,
        }
    }

    /// Intersection distance from a ground observer along `view_dir`.
    pub fn intersection_distance(&self, view_dir: DVec3) -> Result<f64, AtmosphereError> {
        ray_shell_intersection(0.0, view_dir, self.altitude_m)
    }
}

/// Distance along `view_dir` from an observer at altitude `observer_altitude_m`
/// to a shell `shell_altitude_m` above the mean Earth radius.
///
/// The observer sits at `(0, r + h_obs, 0)` with the shell centered on the
/// origin. Only the inside-looking-out case is defined: an observer at or
/// above the shell, or a ray with no real forward intersection, is a
/// [`AtmosphereError::GeometryMiss`] for the caller to skip — mirroring a
/// fragment `discard` at the geometry level.
pub fn ray_shell_intersection(
    observer_altitude_m: f64,
    view_dir: DVec3,
    shell_altitude_m: f64,
) -> Result<f64, AtmosphereError> {
    let length = view_dir.length();
    if !((1.0 - 1e-6)..=(1.0 + 1e-6)).contains(&length) {
        return Err(AtmosphereError::Domain {
            value: length,
            reason: "view direction must be normalized",
        });
    }

    let earth_radius_m = welkin_astro::mean_radius() * 1_000.0;
    let observer_radius_m = earth_radius_m + observer_altitude_m;
    let shell_radius_m = earth_radius_m + shell_altitude_m;

    let miss = AtmosphereError::GeometryMiss {
        observer_radius_m,
        shell_radius_m,
    };
    if observer_radius_m >= shell_radius_m {
        return Err(miss);
    }

    let origin = DVec3::new(0.0, observer_radius_m, 0.0);
    let b = origin.dot(view_dir);
    let c = origin.dot(origin) - shell_radius_m * shell_radius_m;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return Err(miss);
    }

    let distance = -b + discriminant.sqrt();
    if distance <= 0.0 {
        return Err(miss);
    }
    Ok(distance)
}
