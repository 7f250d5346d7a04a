//! Time conversion error types.

/// Errors that can occur when converting calendar input to a Julian Day.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimeError {
    /// Calendar fields do not describe a real date.
    #[error("invalid date: {reason} ({year:04}-{month:02}-{day:02})")]
    InvalidDate {
        /// Year as given by the caller.
        year: i32,
        /// Month as given by the caller.
        month: u32,
        /// Day as given by the caller.
        day: u32,
        /// Which field failed and why.
        reason: &'static str,
    },

    /// Time-of-day fields are outside their valid range.
    #[error("invalid time of day: {reason}")]
    InvalidTime {
        /// Which field failed and why.
        reason: &'static str,
    },
}
