//! Astronomical time base: calendar dates, Julian Day conversion, and the
//! simulation clock that drives per-frame sky updates.
//!
//! Every other computation in the workspace is keyed by a [`JulianDay`], a
//! continuous fractional day count. Calendar input is validated up front so
//! that a malformed date fails loudly instead of producing a silently wrong
//! day number.

pub mod clock;
pub mod datetime;
pub mod error;
pub mod julian;

pub use clock::SimulationClock;
pub use datetime::DateTime;
pub use error::TimeError;
pub use julian::{J2000, JulianDay, calendar, julian_day};
