//! Validated calendar timestamps.

use crate::error::TimeError;

/// A calendar timestamp with fractional seconds and a UTC offset.
///
/// Construction through [`DateTime::new`] validates every field; a value that
/// exists is always a real date. The UTC offset is subtracted during Julian
/// Day conversion so that all downstream astronomy runs in universal time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateTime {
    /// Astronomical year numbering (1 BC is year 0).
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, 1–28/29/30/31 depending on month and year.
    pub day: u32,
    /// Hour, 0–23.
    pub hour: u32,
    /// Minute, 0–59.
    pub minute: u32,
    /// Seconds including fraction, `0.0 <= s < 60.0`.
    pub second: f64,
    /// Offset of local time ahead of UTC in hours, −14.0..=+14.0.
    pub utc_offset_hours: f64,
}

impl DateTime {
    /// Create a validated timestamp.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let dt = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Create a validated timestamp at 0h UTC.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0, 0.0)
    }

    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<(), TimeError> {
        let invalid = |reason| TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
            reason,
        };

        if self.month < 1 || self.month > 12 {
            return Err(invalid("month outside 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(invalid("day outside valid range for month"));
        }
        // The ten days removed by the Gregorian reform never existed.
        if self.year == 1582 && self.month == 10 && (5..=14).contains(&self.day) {
            return Err(invalid("date falls in the Gregorian reform gap"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTime {
                reason: "hour outside 0-23",
            });
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTime {
                reason: "minute outside 0-59",
            });
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTime {
                reason: "second outside 0-60",
            });
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(TimeError::InvalidTime {
                reason: "UTC offset outside -14..=+14 hours",
            });
        }
        Ok(())
    }

    /// Time of day as fractional hours in local time.
    pub fn fractional_hours(&self) -> f64 {
        self.hour as f64 + (self.minute as f64 + self.second / 60.0) / 60.0
    }

    /// `true` if this date uses the Gregorian calendar (1582-10-15 or later).
    pub fn is_gregorian(&self) -> bool {
        (self.year, self.month, self.day) >= (1582, 10, 15)
    }
}

/// Number of days in the given month, honoring leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap year rule; plain quadrennial rule before the reform.
pub fn is_leap_year(year: i32) -> bool {
    if year < 1582 {
        year % 4 == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_constructs() {
        let dt = DateTime::new(2024, 6, 21, 12, 30, 15.5, 2.0);
        assert!(dt.is_ok(), "Midsummer noon should validate: {dt:?}");
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let dt = DateTime::from_ymd(2024, 13, 1);
        assert!(matches!(dt, Err(TimeError::InvalidDate { .. })), "{dt:?}");
        let dt = DateTime::from_ymd(2024, 0, 1);
        assert!(matches!(dt, Err(TimeError::InvalidDate { .. })), "{dt:?}");
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(DateTime::from_ymd(2024, 4, 31).is_err(), "April has 30 days");
        assert!(DateTime::from_ymd(2024, 2, 30).is_err(), "No February 30th");
    }

    #[test]
    fn test_leap_year_february() {
        assert!(
            DateTime::from_ymd(2000, 2, 29).is_ok(),
            "2000 is a leap year (divisible by 400)"
        );
        assert!(
            DateTime::from_ymd(1900, 2, 29).is_err(),
            "1900 is not a leap year (century rule)"
        );
        assert!(DateTime::from_ymd(2024, 2, 29).is_ok(), "2024 is a leap year");
    }

    #[test]
    fn test_gregorian_gap_rejected() {
        for day in 5..=14 {
            assert!(
                DateTime::from_ymd(1582, 10, day).is_err(),
                "1582-10-{day:02} was removed by the Gregorian reform"
            );
        }
        assert!(DateTime::from_ymd(1582, 10, 4).is_ok());
        assert!(DateTime::from_ymd(1582, 10, 15).is_ok());
    }

    #[test]
    fn test_time_of_day_bounds() {
        assert!(DateTime::new(2024, 1, 1, 24, 0, 0.0, 0.0).is_err());
        assert!(DateTime::new(2024, 1, 1, 0, 60, 0.0, 0.0).is_err());
        assert!(DateTime::new(2024, 1, 1, 0, 0, 60.0, 0.0).is_err());
        assert!(DateTime::new(2024, 1, 1, 0, 0, 59.999, 0.0).is_ok());
    }

    #[test]
    fn test_utc_offset_bounds() {
        assert!(DateTime::new(2024, 1, 1, 0, 0, 0.0, 14.0).is_ok());
        assert!(DateTime::new(2024, 1, 1, 0, 0, 0.0, -14.0).is_ok());
        assert!(DateTime::new(2024, 1, 1, 0, 0, 0.0, 15.0).is_err());
    }

    #[test]
    fn test_fractional_hours() {
        let dt = DateTime::new(2024, 1, 1, 18, 30, 36.0, 0.0).unwrap();
        assert!(
            (dt.fractional_hours() - 18.51).abs() < 1e-9,
            "18:30:36 = 18.51 h, got {}",
            dt.fractional_hours()
        );
    }
}
