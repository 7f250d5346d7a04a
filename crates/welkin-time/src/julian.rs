//! Calendar ↔ Julian Day conversion.
//!
//! Follows the algorithm of Meeus, "Astronomical Algorithms", 2nd ed.,
//! chapter 7. Dates from 1582-10-15 onward use the Gregorian calendar;
//! earlier dates use the Julian calendar, matching historical usage.

use crate::datetime::DateTime;
use crate::error::TimeError;

/// A continuous fractional day count, the time parameter of every
/// astronomical function in the workspace.
///
/// Day 0.0 began at noon on 4713 BC January 1 (Julian calendar). Integer
/// values land on noon UT; `.5` fractions land on midnight.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct JulianDay(pub f64);

/// The J2000.0 reference epoch: 2000 January 1, 12h TT.
pub const J2000: JulianDay = JulianDay(2_451_545.0);

impl JulianDay {
    /// Days elapsed since the J2000.0 epoch (negative before it).
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000.0
    }

    /// Julian centuries elapsed since J2000.0, the `T` parameter of the
    /// polynomial expressions in the Earth model.
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / 36_525.0
    }

    /// A new value offset by `days`.
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// A new value offset by `seconds`.
    pub fn add_seconds(self, seconds: f64) -> Self {
        Self(self.0 + seconds / 86_400.0)
    }
}

/// Convert a validated calendar timestamp to a Julian Day.
///
/// The UTC offset is folded into the fractional day so the result is in
/// universal time. Fails with [`TimeError::InvalidDate`] for calendar fields
/// that do not describe a real date.
pub fn julian_day(dt: &DateTime) -> Result<JulianDay, TimeError> {
    dt.validate()?;

    let (mut y, mut m) = (dt.year as f64, dt.month as f64);
    if dt.month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let day = dt.day as f64 + (dt.fractional_hours() - dt.utc_offset_hours) / 24.0;

    // Meeus (7.1); b = 0 keeps the Julian calendar before the reform.
    let b = if dt.is_gregorian() {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5;
    Ok(JulianDay(jd))
}

/// Convert a Julian Day back to calendar fields (UTC, offset 0).
///
/// Inverse of [`julian_day`]; round-trips to within 1e-6 day.
pub fn calendar(jd: JulianDay) -> DateTime {
    let shifted = jd.0 + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_with_fraction = b - d - (30.6001 * e).floor() + f;
    let day = day_with_fraction.floor();
    let day_fraction = day_with_fraction - day;

    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let mut total_seconds = day_fraction * 86_400.0;
    // Guard against f64 noise pushing the fraction to a full day.
    if total_seconds >= 86_400.0 {
        total_seconds = 86_400.0 - 1e-9;
    }
    let hour = (total_seconds / 3600.0).floor();
    total_seconds -= hour * 3600.0;
    let minute = (total_seconds / 60.0).floor();
    let second = total_seconds - minute * 60.0;

    DateTime {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second,
        utc_offset_hours: 0.0,
    }
}
