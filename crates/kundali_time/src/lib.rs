//! Time conversions for chart calculation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - Local civil time → UTC with timezone offsets
//! - `UtcTime`, the canonical UTC instant used by the chart pipeline
//! - Earth Rotation Angle, GMST and local sidereal time
//!
//! UTC is used directly as UT1 throughout. The sub-second difference is far
//! below the resolution of whole-sign and nakshatra boundaries.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use civil::{LocalDateTime, days_in_month};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_YEAR, J2000_JD, calendar_to_jd, jd_to_calendar,
    julian_centuries, weekday_from_jd,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
