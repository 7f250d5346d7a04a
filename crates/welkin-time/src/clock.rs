//! Simulation clock driving time-lapse skies.

use crate::julian::JulianDay;

/// Advances a [`JulianDay`] from real frame time.
///
/// One simulated second passes per real second at `time_scale = 1.0`; a scale
/// of 3600.0 compresses an hour of sky motion into each real second. The
/// clock can be paused without losing its current instant.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    /// Current simulated instant.
    pub now: JulianDay,
    /// Simulated seconds per real second.
    pub time_scale: f64,
    /// Whether `tick` advances the clock.
    pub paused: bool,
}

impl SimulationClock {
    /// Create a clock at the given instant running in real time.
    pub fn new(start: JulianDay) -> Self {
        Self {
            now: start,
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Advance by `dt` real seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        self.now = self.now.add_seconds(dt * self.time_scale);
    }

    /// Jump to an absolute instant, leaving scale and pause state alone.
    pub fn seek(&mut self, to: JulianDay) {
        self.now = to;
    }
}
