//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level sky toolkit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    /// Ground observer location.
    pub observer: ObserverConfig,
    /// Simulated time settings.
    pub time: TimeConfig,
    /// Starfield settings.
    pub stars: StarConfig,
    /// Cloud layer stack, lowest first.
    pub cloud_layers: Vec<CloudLayerConfig>,
    /// Per-pixel dither settings.
    pub dither: DitherConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Observer location. Degrees here, radians everywhere past the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    /// Geographic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

/// Simulated time settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeConfig {
    /// Start the simulation at the wall clock instead of `start_julian_day`.
    pub follow_system_clock: bool,
    /// Simulation start as a Julian Day when not following the wall clock.
    pub start_julian_day: f64,
    /// Simulated seconds per real second.
    pub time_scale: f64,
}

/// Starfield settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarConfig {
    /// Catalog seed.
    pub seed: u64,
    /// Candidate stars drawn before the magnitude cut.
    pub candidate_count: u32,
}

/// One cloud layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudLayerConfig {
    /// Layer altitude above the surface in meters.
    pub altitude_m: f64,
    /// Sky-cover fraction, 0.0 - 1.0.
    pub coverage: f64,
    /// Density-edge sharpness exponent.
    pub sharpness: f64,
    /// Noise seed for the density bake.
    pub seed: u64,
    /// Density texture edge length in texels.
    pub texture_size: u32,
    /// Fractal octave count.
    pub octaves: u32,
    /// Octave amplitude divisor.
    pub alpha: f64,
    /// Octave frequency multiplier.
    pub beta: f64,
    /// Wind velocity over ground in meters per second (east, north).
    pub wind_velocity_m_s: (f64, f64),
}

/// Per-pixel dither settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DitherConfig {
    /// Hash seed.
    pub seed: u32,
    /// Dither amplitude in output value units.
    pub amplitude: f32,
}

/// Debug/development settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl SkyConfig {
    /// Load from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&content).map_err(ConfigError::ParseError)
    }

    /// Load from a RON file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save as pretty-printed RON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::default();
        let content =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)
    }
}

// --- Default implementations ---

impl Default for ObserverConfig {
    fn default() -> Self {
        // Greenwich.
        Self {
            latitude_deg: 51.4769,
            longitude_deg: 0.0,
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            follow_system_clock: true,
            start_julian_day: 2_451_545.0,
            time_scale: 1.0,
        }
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            candidate_count: 9_000,
        }
    }
}

impl Default for CloudLayerConfig {
    fn default() -> Self {
        Self {
            altitude_m: 2_500.0,
            coverage: 0.5,
            sharpness: 1.4,
            seed: 0,
            texture_size: 256,
            octaves: 5,
            alpha: 2.0,
            beta: 2.0,
            wind_velocity_m_s: (12.0, 3.0),
        }
    }
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            amplitude: 1.0 / 255.0,
        }
    }
}
